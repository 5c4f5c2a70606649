//! Persisted player settings
//!
//! Only the best score survives between rounds. Stored as JSON under a fixed
//! key; anything missing or unreadable falls back to defaults.

use serde::{Deserialize, Serialize};

use crate::persistence::KvStore;

/// Player settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Best score reached so far
    pub score: u32,
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "settings";

    /// Load settings, treating absent or malformed data as "no best score yet"
    pub fn load(store: &impl KvStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings unavailable ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings (fire-and-forget)
    pub fn save(&self, store: &impl KvStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("Settings saved (best {})", self.score);
            }
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_absent_settings_default_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store).score, 0);
    }

    #[test]
    fn test_empty_object_defaults_to_zero() {
        let store = MemoryStore::with_entry(Settings::STORAGE_KEY, "{}");
        assert_eq!(Settings::load(&store), Settings { score: 0 });
    }

    #[test]
    fn test_malformed_settings_default_to_zero() {
        for junk in ["not json", r#"{"score":-4}"#, r#"{"score":"high"}"#, "null"] {
            let store = MemoryStore::with_entry(Settings::STORAGE_KEY, junk);
            assert_eq!(Settings::load(&store).score, 0, "input {:?}", junk);
        }
    }

    #[test]
    fn test_save_writes_score_object() {
        let store = MemoryStore::new();
        Settings { score: 7 }.save(&store);
        assert_eq!(
            store.writes(),
            vec![("settings".to_string(), r#"{"score":7}"#.to_string())]
        );
        assert_eq!(Settings::load(&store).score, 7);
    }
}
