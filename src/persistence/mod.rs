//! Key-value persistence
//!
//! The game only ever stores small JSON strings under fixed keys. Writes are
//! fire-and-forget: callers never wait for them and never see their errors.

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// Failure reading from a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// External key-value store
pub trait KvStore {
    /// Read a value, `None` if the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value without waiting for or reporting the outcome
    fn set(&self, key: &str, value: &str);

    /// Wipe everything this store holds
    fn clear(&self);
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

/// In-process store used natively and in tests. Records every write.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry (not counted as a write)
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Every `set` call so far, oldest first
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip_and_clear() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v");
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.clear();
        assert_eq!(store.get("k").unwrap(), None);
        // Clearing does not rewrite history
        assert_eq!(store.writes(), vec![("k".to_string(), "v".to_string())]);
    }

    #[test]
    fn test_with_entry_is_not_a_write() {
        let store = MemoryStore::with_entry("settings", "{}");
        assert_eq!(store.get("settings").unwrap().as_deref(), Some("{}"));
        assert!(store.writes().is_empty());
    }
}
