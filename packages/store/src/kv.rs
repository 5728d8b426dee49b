//! # Key/value persistence surface
//!
//! [`KeyValueStore`] is the small string-keyed interface the client persists
//! session data through. It is synchronous because its only browser back-end,
//! `window.localStorage`, is synchronous.
//!
//! Implementations swallow back-end errors: reads degrade to `None` and writes
//! become no-ops, logged at `warn`. A broken storage area must never take the
//! UI down with it.

/// String-keyed storage that outlives a single page view.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
