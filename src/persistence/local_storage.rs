//! Browser LocalStorage backend
//!
//! Keys are namespaced with a prefix so `clear` only wipes this game's data.

use wasm_bindgen_futures::spawn_local;

use super::{KvStore, StoreError};

/// LocalStorage-backed store (WASM only)
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    prefix: String,
}

impl LocalStorageStore {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or(StoreError::Unavailable)?
            .local_storage()
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))?
            .ok_or(StoreError::Unavailable)
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl KvStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(&self.full_key(key))
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) {
        let key = self.full_key(key);
        let value = value.to_string();
        // Deferred to the microtask queue so the frame never waits on storage
        spawn_local(async move {
            let result = Self::storage().and_then(|storage| {
                storage
                    .set_item(&key, &value)
                    .map_err(|e| StoreError::Backend(format!("{:?}", e)))
            });
            match result {
                Ok(()) => log::debug!("Saved {}", key),
                Err(e) => log::warn!("Failed to save {}: {}", key, e),
            }
        });
    }

    fn clear(&self) {
        let Ok(storage) = Self::storage() else {
            return;
        };
        let len = storage.length().unwrap_or(0);
        let ours: Vec<String> = (0..len)
            .filter_map(|i| storage.key(i).ok().flatten())
            .filter(|k| k.starts_with(&self.prefix))
            .collect();
        for key in &ours {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("Failed to remove {}: {:?}", key, e);
            }
        }
        log::info!("Cleared {} stored entries", ours.len());
    }
}
