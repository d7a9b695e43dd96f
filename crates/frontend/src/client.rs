//! Client construction for the running page

use crate::storage::BrowserTokenStore;
use std::sync::Arc;
use wicket_api::{ApiClient, ApiError};

/// Base URL for API calls: the page's own origin, relative URLs otherwise.
fn base_url() -> String {
    gloo::utils::window()
        .location()
        .origin()
        .unwrap_or_default()
}

/// Build a client wired to the browser token store.
pub fn api_client() -> Result<ApiClient, ApiError> {
    ApiClient::builder()
        .base_url(base_url())
        .token_store(Arc::new(BrowserTokenStore))
        .build()
}
