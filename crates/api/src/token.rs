//! Token storage abstraction
//!
//! The client and the session loader receive a [`TokenStore`] instead of
//! reaching into ambient browser storage, so the request layer works the
//! same on native (tests, tooling) and wasm.

use std::sync::RwLock;

/// Read/write access to the persisted bearer token.
///
/// Read failures are treated as an absent token.
pub trait TokenStore: Send + Sync {
    /// Current token, if one is stored.
    fn token(&self) -> Option<String>;

    /// Persist a new token.
    fn set(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}

/// In-memory token store for native use and tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a token.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token(), None);

        store.set("abc");
        assert_eq!(store.token(), Some("abc".to_string()));

        store.clear();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn seeded_store_starts_populated() {
        let store = MemoryTokenStore::with_token("abc");
        assert_eq!(store.token(), Some("abc".to_string()));
    }
}
