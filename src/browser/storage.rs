//! Auth token persisted in `localStorage`.

use crate::console::ports::TokenStore;

pub struct LocalStorageTokens {
    key: String,
}

impl LocalStorageTokens {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokens {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            if storage.remove_item(&self.key).is_err() {
                log::warn!("could not clear auth token");
            }
        }
    }
}
