//! Browser `localStorage` backend for the session record.

use crate::storage::SessionStorage;

/// Fixed key holding the persisted session record.
pub const SESSION_KEY: &str = "authState";

/// `localStorage`-backed [`SessionStorage`], one record under [`SESSION_KEY`].
///
/// Holds no state of its own; the backing storage is looked up per call so
/// the struct stays `Send + Sync` even though the browser handle is not.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn backing() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::backing()?.get_item(SESSION_KEY).ok().flatten()
    }

    fn save(&self, raw: &str) {
        if let Some(storage) = Self::backing() {
            let _ = storage.set_item(SESSION_KEY, raw);
        }
    }

    fn remove(&self) {
        if let Some(storage) = Self::backing() {
            let _ = storage.remove_item(SESSION_KEY);
        }
    }
}
