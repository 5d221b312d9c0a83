//! Browser Local Storage
//!
//! `KeyValueStore` over `window.localStorage`. The handle is looked up on
//! every call so the store itself stays `Send + Sync` for signals.

use kanban_core::{BoardError, BoardResult, KeyValueStore};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> BoardResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| BoardError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| BoardError::Storage("local storage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        // Fails with QuotaExceededError when the origin is out of space
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> BoardError {
    BoardError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
