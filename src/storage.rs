use web_sys::{Storage, Window};

use portfolio_fx_core::{KeyValueStore, StorageError};

use crate::error::js_message;

/// `window.localStorage`, or nothing when the browser refuses access
/// (private mode, disabled storage).
pub(crate) struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub(crate) fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            gloo::console::log!("storage: local storage unavailable");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(StorageError::Unavailable);
        };
        storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(js_message(&err)))
    }
}
