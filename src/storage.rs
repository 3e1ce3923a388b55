use crate::constants::STORAGE_KEY;
use awop_core::error::PersistError;
use awop_core::persist::PersistenceBackend;
use wasm_bindgen::JsValue;
use web_sys as web;

/// localStorage for the name-keyed store, `history.replaceState` for the hash.
pub struct BrowserBackend {
    window: web::Window,
}

impl BrowserBackend {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }

    fn storage(&self) -> Result<web::Storage, PersistError> {
        self.window
            .local_storage()
            .map_err(|e| PersistError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| PersistError::StorageUnavailable("localStorage is disabled".into()))
    }
}

impl PersistenceBackend for BrowserBackend {
    fn read_hash(&self) -> Option<String> {
        self.window.location().hash().ok().filter(|h| !h.is_empty())
    }

    fn replace_hash(&mut self, hash: &str) -> Result<(), PersistError> {
        let history = self
            .window
            .history()
            .map_err(|e| PersistError::History(format!("{:?}", e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{hash}")))
            .map_err(|e| PersistError::History(format!("{:?}", e)))
    }

    fn read_store(&self) -> Option<String> {
        match self.storage() {
            Ok(storage) => storage.get_item(STORAGE_KEY).ok().flatten(),
            Err(e) => {
                log::warn!("[storage] {}", e);
                None
            }
        }
    }

    fn write_store(&mut self, json: &str) -> Result<(), PersistError> {
        self.storage()?
            .set_item(STORAGE_KEY, json)
            .map_err(|e| PersistError::Write(format!("{:?}", e)))
    }
}
