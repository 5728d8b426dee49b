use store::{KeyValueStore, TokenStore};

/// Token slot backed by the platform's persistent storage.
///
/// `localStorage` in the browser; an in-memory map elsewhere, which does not
/// survive a restart.
pub fn make_token_store() -> TokenStore<impl KeyValueStore + Clone> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        TokenStore::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        TokenStore::new(store::MemoryStore::new())
    }
}
