//! Durable client storage for the signed-in identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build backs this with `localStorage`; tests and the server
//! render use [`MemoryStorage`]. Two string entries are kept: the JSON
//! identity and the opaque token. Neither carries an expiry.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StorageError;

/// Default key for the JSON identity blob.
pub const USER_KEY: &str = "clubhub.session.user";

/// Default key for the opaque token string.
pub const TOKEN_KEY: &str = "clubhub.session.token";

/// String key/value storage the session persists into.
pub trait SessionStorage {
    /// Read `key`, returning `Ok(None)` when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage key names. Override to namespace several stores in one origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub user_key: String,
    pub token_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { user_key: USER_KEY.to_owned(), token_key: TOKEN_KEY.to_owned() }
    }
}

/// In-memory storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries; zero if the lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |entries| entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.remove(key);
        Ok(())
    }
}
