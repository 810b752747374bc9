use gloo_storage::{LocalStorage, Storage};
use shared::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;

/// Browser `localStorage`, holding raw strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::NotAvailable(describe(e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // setItem only throws when the origin's quota is exhausted
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::NotAvailable(describe(e)))
    }
}
