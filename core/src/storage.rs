use std::cell::RefCell;
use std::collections::HashMap;

use crate::position::{PositionError, WidgetPosition};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("position encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String key-value store provided by the host, e.g. `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// The single widget-position record. Writes are last-write-wins.
pub struct WidgetPositionStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WidgetPositionStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// `Ok(None)` when nothing was ever saved.
    pub fn load(&self) -> Result<Option<WidgetPosition>, PositionError> {
        let Some(raw) = self.store.get(&self.key) else {
            return Ok(None);
        };
        WidgetPosition::parse(&raw).map(Some)
    }

    pub fn save(&self, position: WidgetPosition) -> Result<(), StorageError> {
        let raw = position.to_json()?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        let store = WidgetPositionStore::new(MemoryStore::new(), "k");
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_overwrites() {
        let store = WidgetPositionStore::new(MemoryStore::new(), "k");
        store.save(WidgetPosition::new(1.0, 2.0)).unwrap();
        store.save(WidgetPosition::new(3.0, 4.0)).unwrap();
        assert_eq!(store.load().unwrap(), Some(WidgetPosition::new(3.0, 4.0)));
    }

    #[test]
    fn malformed_record_is_an_error() {
        let backing = MemoryStore::new();
        backing.set("k", "{broken").unwrap();
        let store = WidgetPositionStore::new(backing, "k");
        assert!(store.load().is_err());
    }
}
