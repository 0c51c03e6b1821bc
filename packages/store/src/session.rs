//! # Persisted session record
//!
//! [`SessionStore`] owns the two persisted fields of a signed-in client:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | opaque bearer credential |
//! | [`USER_KEY`] (`"user"`) | JSON snapshot of the [`Identity`] |
//!
//! The two fields are only meaningful together. [`SessionStore::save`]
//! encodes the snapshot before touching storage and, if either write fails,
//! puts back whatever record was there before.
//! [`SessionStore::load`] treats a half-present record as no session.

use crate::kv::{KeyValueStore, StorageError};
use crate::models::Identity;

/// Key for the credential token.
pub const TOKEN_KEY: &str = "token";
/// Key for the identity snapshot.
pub const USER_KEY: &str = "user";

/// A complete persisted session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The persisted credential token, if any. Empty tokens count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// Rehydrate the session. Returns `None` unless both fields are present
    /// and the snapshot decodes.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str::<Identity>(&raw) {
            Ok(identity) => Some(Session { token, identity }),
            Err(e) => {
                tracing::warn!("discarding unreadable session snapshot: {e}");
                None
            }
        }
    }

    /// Overwrite both fields. On failure the previous record is restored.
    pub fn save(&self, token: &str, identity: &Identity) -> Result<(), StorageError> {
        let snapshot = serde_json::to_string(identity)?;
        let prior_token = self.store.get(TOKEN_KEY);
        let prior_user = self.store.get(USER_KEY);

        let written = self
            .store
            .set(TOKEN_KEY, token)
            .and_then(|()| self.store.set(USER_KEY, &snapshot));
        if let Err(e) = written {
            self.restore(TOKEN_KEY, prior_token.as_deref());
            self.restore(USER_KEY, prior_user.as_deref());
            return Err(e);
        }
        Ok(())
    }

    fn restore(&self, key: &str, prior: Option<&str>) {
        match prior {
            Some(value) => {
                if let Err(e) = self.store.set(key, value) {
                    tracing::warn!("could not restore {key} after failed save: {e}");
                }
            }
            None => self.store.remove(key),
        }
    }

    /// Remove both fields, whatever their current state.
    pub fn clear(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;

    fn alice() -> Identity {
        Identity {
            id: 7,
            name: "Alice".to_string(),
            email: "a@b.com".to_string(),
            role: Role::User,
        }
    }

    /// MemoryStore that refuses writes to one key.
    #[derive(Clone)]
    struct RefusingStore {
        inner: MemoryStore,
        refuse: Arc<Mutex<Option<&'static str>>>,
    }

    impl KeyValueStore for RefusingStore {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if *self.refuse.lock().unwrap() == Some(key) {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_save_then_load() {
        let sessions = SessionStore::new(MemoryStore::new());
        assert!(sessions.load().is_none());

        sessions.save("tok-1", &alice()).unwrap();

        let session = sessions.load().unwrap();
        assert_eq!(session.token, "tok-1");
        assert_eq!(session.identity, alice());
    }

    #[test]
    fn test_save_overwrites_previous_session() {
        let sessions = SessionStore::new(MemoryStore::new());
        sessions.save("old", &alice()).unwrap();

        let admin = Identity {
            id: 1,
            name: "Root".to_string(),
            email: "root@b.com".to_string(),
            role: Role::Admin,
        };
        sessions.save("new", &admin).unwrap();

        let session = sessions.load().unwrap();
        assert_eq!(session.token, "new");
        assert_eq!(session.identity, admin);
    }

    #[test]
    fn test_clear_removes_both_fields() {
        let store = MemoryStore::new();
        let sessions = SessionStore::new(store.clone());
        sessions.save("tok", &alice()).unwrap();

        sessions.clear();
        assert!(store.is_empty());

        // Clearing an empty store is fine too
        sessions.clear();
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_token_without_snapshot_is_no_session() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "dangling").unwrap();
        let sessions = SessionStore::new(store.clone());
        assert!(sessions.load().is_none());
        assert_eq!(sessions.token().as_deref(), Some("dangling"));

        store.set(USER_KEY, "not json").unwrap();
        assert!(sessions.load().is_none());
    }

    #[test]
    fn test_snapshot_without_token_is_no_session() {
        let store = MemoryStore::new();
        store
            .set(USER_KEY, &serde_json::to_string(&alice()).unwrap())
            .unwrap();
        store.set(TOKEN_KEY, "  ").unwrap();
        assert!(SessionStore::new(store).load().is_none());
    }

    #[test]
    fn test_failed_snapshot_write_keeps_prior_session() {
        let store = RefusingStore {
            inner: MemoryStore::new(),
            refuse: Arc::new(Mutex::new(None)),
        };
        let sessions = SessionStore::new(store.clone());
        sessions.save("first", &alice()).unwrap();
        let before = sessions.load();

        *store.refuse.lock().unwrap() = Some(USER_KEY);
        let admin = Identity {
            id: 1,
            name: "Root".to_string(),
            email: "root@b.com".to_string(),
            role: Role::Admin,
        };
        assert!(sessions.save("second", &admin).is_err());

        assert_eq!(sessions.load(), before);
        assert_eq!(sessions.token().as_deref(), Some("first"));
    }

    #[test]
    fn test_failed_first_save_leaves_nothing_behind() {
        let store = RefusingStore {
            inner: MemoryStore::new(),
            refuse: Arc::new(Mutex::new(Some(USER_KEY))),
        };
        let sessions = SessionStore::new(store.clone());

        assert!(sessions.save("tok", &alice()).is_err());
        assert!(sessions.token().is_none());
        assert!(store.inner.is_empty());
    }

    #[test]
    fn test_failed_token_write_keeps_prior_session() {
        let store = RefusingStore {
            inner: MemoryStore::new(),
            refuse: Arc::new(Mutex::new(None)),
        };
        let sessions = SessionStore::new(store.clone());
        sessions.save("first", &alice()).unwrap();

        *store.refuse.lock().unwrap() = Some(TOKEN_KEY);
        assert!(sessions.save("second", &alice()).is_err());
        assert_eq!(sessions.load().map(|s| s.token).as_deref(), Some("first"));
    }
}
