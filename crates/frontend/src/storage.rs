//! Browser-backed token storage

use gloo::storage::{LocalStorage, Storage as _};
use wicket_api::TokenStore;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// [`TokenStore`] over the browser's localStorage.
///
/// The token is stored as the raw string (not JSON-encoded) so it stays
/// readable by whatever wrote it. Storage failures read as an absent token.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        let _ = LocalStorage::raw().set_item(TOKEN_KEY, token);
    }

    fn clear(&self) {
        let _ = LocalStorage::raw().remove_item(TOKEN_KEY);
    }
}
