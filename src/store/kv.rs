use std::collections::HashMap;
use std::path::PathBuf;

use tracing::warn;

use super::error::StoreError;

/// State file name in the data directory
const STATE_FILE: &str = "state.json";

/// A flat string-to-string store backed by a single JSON file.
///
/// Each operation reads and rewrites the whole file, which is fine for the
/// handful of keys this application keeps. Nothing is created on disk until
/// the first write.
pub struct KvStore {
    path: PathBuf,
}

impl KvStore {
    /// Create a store backed by `state.json` under the given directory.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(STATE_FILE),
        }
    }

    /// Look up a value. A missing file or missing key is `None`, not an
    /// error; an unreadable or unparseable file is a `ReadFailed`.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let entries = self.read_entries()?;
        Ok(entries.get(key).cloned())
    }

    /// Insert or replace a value. After a successful return the pair is on
    /// disk; an unreadable backing file is discarded and rebuilt so that
    /// still holds.
    pub fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = if self.path.exists() {
            match self.read_entries() {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Discarding unreadable state file");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    /// Remove a key. Removing an absent key (or from a missing file) is a
    /// no-op; an unreadable file may still hold the key, so it is replaced
    /// wholesale.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }

        match self.read_entries() {
            Ok(mut entries) => {
                if entries.remove(key).is_none() {
                    return Ok(());
                }
                self.write_entries(&entries)
            }
            Err(e) => {
                warn!(error = %e, "Discarding unreadable state file");
                self.write_entries(&HashMap::new())
            }
        }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StoreError> {
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| StoreError::ReadFailed(e.to_string()))?;
        serde_json::from_str(&contents).map_err(|e| StoreError::ReadFailed(e.to_string()))
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        }
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn temp_store() -> (tempfile::TempDir, KvStore) {
        let dir = tempdir().unwrap();
        let store = KvStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    #[test]
    fn test_get_without_file_is_none() {
        let (_dir, store) = temp_store();
        assert_eq!(store.get("authState").unwrap(), None);
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let (_dir, store) = temp_store();
        store.set("other", "value").unwrap();
        assert_eq!(store.get("authState").unwrap(), None);
    }

    #[test]
    fn test_get_corrupt_file_is_read_error() {
        let (_dir, store) = temp_store();
        std::fs::write(&store.path, "not json").unwrap();
        assert!(matches!(
            store.get("authState"),
            Err(StoreError::ReadFailed(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Writes
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_then_get_round_trip() {
        let (_dir, store) = temp_store();
        store.set("authState", "true").unwrap();
        assert_eq!(store.get("authState").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_set_replaces_existing_value() {
        let (_dir, store) = temp_store();
        store.set("authState", "true").unwrap();
        store.set("authState", "false").unwrap();
        assert_eq!(store.get("authState").unwrap().as_deref(), Some("false"));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let (_dir, store) = temp_store();
        store.set("authState", "true").unwrap();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("authState").unwrap().as_deref(), Some("true"));
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_set_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let store = KvStore::new(dir.path().join("nested").join("deeper"));
        store.set("authState", "true").unwrap();
        assert_eq!(store.get("authState").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_set_rebuilds_corrupt_file() {
        let (_dir, store) = temp_store();
        std::fs::write(&store.path, "not json").unwrap();
        store.set("authState", "true").unwrap();
        assert_eq!(store.get("authState").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_set_unwritable_path_is_write_error() {
        let (_dir, store) = temp_store();
        std::fs::create_dir(&store.path).unwrap();
        assert!(matches!(
            store.set("authState", "true"),
            Err(StoreError::WriteFailed(_))
        ));
    }

    // -------------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------------

    #[test]
    fn test_remove_deletes_key() {
        let (_dir, store) = temp_store();
        store.set("authState", "true").unwrap();
        store.remove("authState").unwrap();
        assert_eq!(store.get("authState").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let (_dir, store) = temp_store();
        store.set("other", "value").unwrap();
        store.remove("authState").unwrap();
        assert_eq!(store.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_remove_without_file_is_ok() {
        let (_dir, store) = temp_store();
        store.remove("authState").unwrap();
    }

    #[test]
    fn test_remove_rebuilds_corrupt_file() {
        let (_dir, store) = temp_store();
        std::fs::write(&store.path, "not json").unwrap();
        store.remove("authState").unwrap();
        assert_eq!(store.get("authState").unwrap(), None);
    }
}
