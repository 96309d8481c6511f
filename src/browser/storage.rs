//! `localStorage`-backed [`PreferenceStore`].

use web_sys::Storage;

use crate::error::UiError;
use crate::theme::PreferenceStore;

/// Handle to the origin's `localStorage`, if the browser allows it.
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Open storage. Private browsing modes may refuse; reads then return
    /// nothing and writes fail.
    pub fn open() -> Self {
        let storage = match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(err)) => {
                log::debug!("storage: unavailable: {}", UiError::from(err));
                None
            }
            None => None,
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("storage: read {key} failed: {}", UiError::from(err));
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), UiError> {
        let storage = self.storage.as_ref().ok_or_else(|| UiError::Storage("localStorage unavailable".to_owned()))?;
        storage.set_item(key, value).map_err(|err| UiError::Storage(UiError::from(err).to_string()))
    }
}
