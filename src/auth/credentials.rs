/// Username of the built-in demo account
pub const DEMO_USERNAME: &str = "krishnamodi";

/// Password of the built-in demo account
pub const DEMO_PASSWORD: &str = "Admin@123";

/// Pluggable credential checking.
///
/// The session never inspects credentials itself; it asks whatever
/// implementation it was constructed with. Tests inject their own.
pub trait CredentialVerifier {
    /// Returns true when the pair matches a known account.
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Verifier backed by a single fixed username/password pair.
///
/// This is the whole account database: one pair, compared verbatim.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl Default for StaticCredentials {
    /// The demo account baked into the application.
    fn default() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_verifies() {
        let creds = StaticCredentials::new("tester", "hunter2");
        assert!(creds.verify("tester", "hunter2"));
    }

    #[test]
    fn test_near_misses_are_rejected() {
        let creds = StaticCredentials::new("tester", "hunter2");
        assert!(!creds.verify("Tester", "hunter2"));
        assert!(!creds.verify("tester", "Hunter2"));
        assert!(!creds.verify("tester ", "hunter2"));
        assert!(!creds.verify("tester", "hunter2 "));
        assert!(!creds.verify("", ""));
    }

    #[test]
    fn test_default_is_demo_account() {
        let creds = StaticCredentials::default();
        assert!(creds.verify(DEMO_USERNAME, DEMO_PASSWORD));
        assert!(!creds.verify(DEMO_USERNAME, "wrong"));
    }
}
