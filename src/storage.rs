//! Browser Storage
//!
//! `KeyValueStorage` over `window.localStorage`.

use folder_todo_core::{DomainError, DomainResult, KeyValueStorage};
use wasm_bindgen::JsValue;

/// Handle to the page's localStorage, looked up on every access
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(format!("{:?}", err))
}
