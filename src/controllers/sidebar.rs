//! Sidebar Collapse State

use std::rc::Rc;

use crate::config::SIDEBAR_STORAGE_KEY;

/// String key-value persistence
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`; unavailable storage reads as empty
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("[Sidebar] Failed to persist {}: {:?}", key, e);
                }
            }
            None => log::warn!("[Sidebar] localStorage unavailable"),
        }
    }
}

#[derive(Clone)]
pub struct SidebarController {
    store: Rc<dyn KeyValueStore>,
}

impl SidebarController {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Missing or unreadable state means expanded
    pub fn is_collapsed(&self) -> bool {
        self.store.get(SIDEBAR_STORAGE_KEY).as_deref() == Some("true")
    }

    /// Flip and persist; returns the new collapsed state
    pub fn toggle(&self) -> bool {
        let collapsed = !self.is_collapsed();
        self.store.set(SIDEBAR_STORAGE_KEY, if collapsed { "true" } else { "false" });
        collapsed
    }
}
