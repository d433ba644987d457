use bingo_core::{BingoError, Result, SessionStore};
use wasm_bindgen::JsValue;

/// [`SessionStore`] backed by `window.sessionStorage`.
#[derive(Clone, Debug)]
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

impl BrowserSessionStore {
    /// Session storage of the current window, `None` outside a browser page or when storage is disabled.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        match window.session_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(err) => {
                log::warn!("session storage unavailable: {:?}", err);
                None
            }
        }
    }
}

fn storage_error(err: JsValue) -> BingoError {
    BingoError::Storage(format!("{:?}", err))
}

impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(storage_error)
    }

    fn clear(&mut self) -> Result<()> {
        self.storage.clear().map_err(storage_error)
    }
}
