//! Key-value preference storage
//!
//! The core only needs string get/set. In the browser this is backed by
//! `localStorage`; native hosts and tests use [`MemoryPreferences`].

mod memory;
#[cfg(feature = "wasm")]
mod local_storage;

pub use memory::MemoryPreferences;
#[cfg(feature = "wasm")]
pub use local_storage::LocalStoragePreferences;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PreferenceError;

/// String key-value store for user preferences
pub trait PreferenceStore {
    /// Read a raw value; `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a raw value
    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError>;
}

/// Decode a stored JSON value
///
/// Returns `Ok(None)` when nothing is stored under `key`.
pub fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>, PreferenceError>
where
    T: DeserializeOwned,
    S: PreferenceStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| PreferenceError::Malformed {
            key: key.to_string(),
            source,
        })
}

/// Encode and store a JSON value
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> Result<(), PreferenceError>
where
    T: Serialize + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Prefs {
        level: u32,
    }

    #[test]
    fn test_missing_key_loads_none() {
        let store = MemoryPreferences::new();
        let loaded: Option<Prefs> = load_json(&store, "missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryPreferences::new();
        save_json(&mut store, "prefs", &Prefs { level: 3 }).unwrap();
        assert_eq!(store.get("prefs").as_deref(), Some(r#"{"level":3}"#));

        let loaded: Option<Prefs> = load_json(&store, "prefs").unwrap();
        assert_eq!(loaded, Some(Prefs { level: 3 }));
    }

    #[test]
    fn test_malformed_value_reports_key() {
        let mut store = MemoryPreferences::new();
        store.set("prefs", "not json".to_string()).unwrap();

        let err = load_json::<Prefs, _>(&store, "prefs").unwrap_err();
        match err {
            PreferenceError::Malformed { key, .. } => assert_eq!(key, "prefs"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut store: Box<dyn PreferenceStore> = Box::new(MemoryPreferences::new());
        save_json(&mut *store, "n", &7u32).unwrap();
        assert_eq!(load_json::<u32, _>(&*store, "n").unwrap(), Some(7));
    }
}
