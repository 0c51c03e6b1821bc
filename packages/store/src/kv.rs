//! # Key-value persistence
//!
//! The client keeps exactly two persisted values (the credential token and a
//! JSON snapshot of the signed-in [`crate::Identity`]), so storage is modelled
//! as a tiny string-to-string map. Every backend implements [`KeyValueStore`]:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStore`] | tests, fallback |
//! | [`crate::FileStore`] | native builds, one file per key |
//! | `LocalStore` | browser `localStorage` (WASM + `web` feature) |
//!
//! Reads never fail: an unreadable value is reported as absent. Writes return
//! a [`StorageError`] so callers can keep multi-key updates consistent.

use thiserror::Error;

/// Synchronous string key-value storage.
pub trait KeyValueStore: Clone {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str);
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),
}
