//! # `localStorage` key/value store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! Values live in `window.localStorage`, so they survive page reloads and are
//! shared by every tab on the same origin.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (no window, disabled by privacy settings) or
//! full. Every method looks the storage area up fresh and degrades quietly:
//! reads return `None`, writes are dropped with a `warn` log.

use crate::kv::KeyValueStore;
use web_sys::Storage;

/// `window.localStorage`-backed KeyValueStore for the web platform.
///
/// Zero-sized and `Copy`; the storage handle is resolved on each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!(key, "localStorage unavailable, value not persisted");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, error = ?e, "Failed to write localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!(key, error = ?e, "Failed to remove localStorage item");
            }
        }
    }
}
