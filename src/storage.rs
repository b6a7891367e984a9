//! Best-effort key/value persistence for the theme preference.
//!
//! Browsers may refuse storage access outright (private browsing, blocked
//! third-party storage, exhausted quota). Stores report that as a
//! [`StorageError`]; [`read_optional`] and [`write_best_effort`] collapse
//! those errors into "absent" and "no-op" respectively.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

/// A string key/value store scoped to the site's origin.
pub trait PreferenceStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the store is unavailable or refuses the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Read `key`, treating any storage failure as an absent value.
pub fn read_optional<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.load(key) {
        Ok(value) => value,
        Err(_) => None,
    }
}

/// Write `key`, discarding any storage failure.
///
/// Returns whether the write landed.
pub fn write_best_effort<S: PreferenceStore + ?Sized>(store: &mut S, key: &str, value: &str) -> bool {
    store.save(key, value).is_ok()
}

/// In-memory store, optionally simulating a browser that blocks storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    blocked: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that fails every read and write.
    #[must_use]
    pub fn blocked() -> Self {
        Self { entries: HashMap::new(), blocked: true }
    }

    /// A store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries, blocked: false }
    }

    /// Peek at a stored value without going through the fallible API.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.blocked {
            return Err(StorageError::Unavailable("storage is blocked".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.blocked {
            return Err(StorageError::WriteRejected("storage is blocked".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, looked up on every access.
///
/// Looking the store up lazily matches browsers that throw on the
/// `localStorage` getter itself rather than on individual calls.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "browser")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(StorageError::Unavailable("localStorage is null".to_string())),
            Err(err) => Err(StorageError::Unavailable(format!("{err:?}"))),
        }
    }
}

#[cfg(feature = "browser")]
impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| StorageError::Unavailable(format!("{err:?}")))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected(format!("{err:?}")))
    }
}
