//! # Filesystem-backed key-value store
//!
//! [`FileStore`] persists each key as a small file under a base directory so
//! the session survives restarts of native builds.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token      # raw credential token
//! └── user       # JSON identity snapshot
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/luxury-stay/` |
//! | Linux | `~/.local/share/luxury-stay/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\luxury-stay\` |

use std::path::PathBuf;

use crate::kv::{KeyValueStore, StorageError};

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let write_err = |e: std::io::Error| StorageError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(&self.base).map_err(write_err)?;
        std::fs::write(self.key_path(key), value).map_err(write_err)
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("could not remove {key}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("luxury_stay_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("token", "secret").unwrap();

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("token").as_deref(), Some("secret"));

        reopened.remove("token");
        assert!(store.get("token").is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_missing_key_is_quiet() {
        let dir = std::env::temp_dir().join(format!("luxury_stay_missing_{}", std::process::id()));
        let store = FileStore::new(dir.clone());

        // Neither the file nor the directory exists
        store.remove("token");
        assert!(store.get("token").is_none());

        store.set("user", "{}").unwrap();
        store.remove("user");
        store.remove("user");
        assert!(store.get("user").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_failure_leaves_entry() {
        let dir = std::env::temp_dir().join(format!("luxury_stay_dirkey_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("token")).unwrap();

        // A directory in place of the key file cannot be removed with remove_file
        let store = FileStore::new(dir.clone());
        store.remove("token");
        assert!(dir.join("token").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
