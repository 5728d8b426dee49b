//! The persisted auth-token slot.

use crate::kv::KeyValueStore;

/// Key the auth token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Typed access to the `token` entry of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct TokenStore<S> {
    inner: S,
}

impl<S: KeyValueStore> TokenStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn save(&self, token: &str) {
        self.inner.set(TOKEN_KEY, token);
    }

    pub fn load(&self) -> Option<String> {
        self.inner.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn clear(&self) {
        self.inner.remove(TOKEN_KEY);
    }
}
