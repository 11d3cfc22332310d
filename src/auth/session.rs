use tracing::{debug, warn};

use crate::store::KvStore;

use super::credentials::CredentialVerifier;

/// Storage key for the persisted authentication flag
const AUTH_STATE_KEY: &str = "authState";

/// In-memory session state with best-effort persistence.
///
/// The session owns its store and verifier; the application constructs it
/// exactly once and passes it down by reference. `is_authenticated` has no
/// definite meaning until `initialize` has run, which callers can check
/// through `is_initializing`.
pub struct Session {
    store: KvStore,
    verifier: Box<dyn CredentialVerifier>,
    authenticated: bool,
    initializing: bool,
}

impl Session {
    pub fn new(store: KvStore, verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            store,
            verifier,
            authenticated: false,
            initializing: true,
        }
    }

    /// Load the persisted flag from the store. Runs once; later calls are
    /// no-ops. Any problem reading the flag means "no prior session" rather
    /// than an error the caller has to handle.
    pub fn initialize(&mut self) {
        if !self.initializing {
            return;
        }

        self.authenticated = match self.store.get(AUTH_STATE_KEY) {
            Ok(Some(value)) => match value.parse::<bool>() {
                Ok(flag) => flag,
                Err(_) => {
                    warn!(value = %value, "Unrecognized auth state value, treating as signed out");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Failed to read auth state, treating as signed out");
                false
            }
        };
        self.initializing = false;

        debug!(authenticated = self.authenticated, "Session initialized");
    }

    /// Verify the credentials and sign in. Returns false on a mismatch,
    /// leaving every piece of state untouched.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if !self.verifier.verify(username, password) {
            debug!("Credential verification failed");
            return false;
        }

        self.authenticated = true;
        // Persistence is best-effort: the in-memory flag stays authoritative
        if let Err(e) = self.store.set(AUTH_STATE_KEY, "true") {
            warn!(error = %e, "Failed to persist auth state");
        }
        true
    }

    /// Sign out and clear the persisted flag. Safe to call repeatedly.
    pub fn logout(&mut self) {
        self.authenticated = false;
        if let Err(e) = self.store.remove(AUTH_STATE_KEY) {
            warn!(error = %e, "Failed to clear persisted auth state");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// True until the persisted flag has been loaded
    pub fn is_initializing(&self) -> bool {
        self.initializing
    }
}

// ============================================================================
// Tests
// ============================================================================
