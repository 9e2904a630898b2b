//! Browser `localStorage` preference store

use super::PreferenceStore;
use crate::error::PreferenceError;

/// Preference store over `window.localStorage`
///
/// Every access goes through the live `Storage` handle. When storage is
/// blocked (privacy mode, sandboxed iframe) reads return `None` and writes
/// report [`PreferenceError::Unavailable`].
#[derive(Clone, Debug, Default)]
pub struct LocalStoragePreferences {
    _private: (),
}

impl LocalStoragePreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceError> {
        let storage = Self::storage()
            .ok_or_else(|| PreferenceError::Unavailable("localStorage is not accessible".into()))?;
        storage
            .set_item(key, &value)
            .map_err(|err| PreferenceError::Unavailable(format!("{err:?}")))
    }
}
