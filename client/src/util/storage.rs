//! Browser `localStorage` access for the session store and view preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` is the `SessionStorage` the app runs with. On the server
//! render it holds nothing, so every session starts `idle` until the browser
//! hydrates it.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use session::{SessionStorage, StorageError};

/// `window.localStorage` behind the `SessionStorage` seam.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn backend_error(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend { key: key.to_owned(), reason: format!("{err:?}") }
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| backend_error(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| backend_error(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| backend_error(key, &e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

/// Load a JSON value stored under `key`. Missing or unparsable entries are `None`.
pub fn load_json<T: DeserializeOwned>(storage: &impl SessionStorage, key: &str) -> Option<T> {
    let raw = match storage.read(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::debug!("storage: read {key} failed: {e}");
            return None;
        }
    };
    serde_json::from_str(&raw)
        .inspect_err(|e| log::debug!("storage: ignoring malformed {key}: {e}"))
        .ok()
}

/// Save `value` as JSON under `key`. Failures are logged and dropped.
pub fn save_json<T: Serialize>(storage: &impl SessionStorage, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("storage: could not encode {key}: {e}");
            return;
        }
    };
    if let Err(e) = storage.write(key, &raw) {
        log::warn!("storage: write {key} failed: {e}");
    }
}
