//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. Values live in `window.localStorage` under their key
//! unchanged, so the JSON array written here is the same value the earlier
//! browser-only admin page kept under `"resources"`.
//!
//! ## Error handling
//!
//! A missing `window` or disabled storage (private browsing, sandboxed iframes)
//! and a rejected write (quota exceeded) surface as
//! [`StoreError::Unavailable`] so the UI can report them.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::{Result, StoreError};
use crate::repo::KeyValueStore;

/// localStorage-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> StoreError {
    StoreError::Unavailable(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.storage()?.set_item(key, &value).map_err(js_error)
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
