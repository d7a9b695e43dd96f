//! Wicket API client

use crate::envelope::Envelope;
use crate::error::{ApiError, TransportPhase};
use crate::token::TokenStore;
use reqwest::{header, Client, ClientBuilder, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Per-request timeout applied on native targets.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TIMEOUT: Duration = Duration::from_millis(3000);

/// Client for the enveloped backend API.
///
/// Every request carries `Content-Type`/`Accept: application/json` plus the
/// literal `credential: include` header the backend expects, and — when the
/// injected [`TokenStore`] holds one — the raw token as the `authorization`
/// header (no `Bearer` prefix; the backend reads the bare value).
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenStore>>,
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder, injecting the stored token if present.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = self.tokens.as_ref().and_then(|store| store.token()) {
            request = request.header(header::AUTHORIZATION, token);
        }

        request
    }

    /// Execute a request, classify the envelope, and unwrap its data.
    ///
    /// Classification sees the full envelope; the metadata is discarded only
    /// after a `success == false` envelope has been turned into
    /// [`ApiError::Business`].
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::debug!(status = status.as_u16(), "request rejected by server");
            return Err(ApiError::Transport {
                phase: TransportPhase::Responded {
                    status: status.as_u16(),
                },
                detail,
            });
        }

        let body = response.text().await?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&body)?;
        let data = envelope.into_data()?.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(data).map_err(ApiError::Decode)
    }

    /// GET `path` and unwrap the enveloped response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute(self.request(Method::GET, path)).await
    }

    /// POST `body` as JSON to `path` and unwrap the enveloped response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }
}

/// Builder for [`ApiClient`]
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    tokens: Option<Arc<dyn TokenStore>>,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    /// Set the base URL (required)
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Inject the token store consulted before every request
    pub fn token_store(mut self, tokens: Arc<dyn TokenStore>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Override the default 3000ms request timeout (native only)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ApiError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        // Literal header, not reqwest's credentials mode: the backend reads
        // `credential: include` off the wire.
        headers.insert("credential", header::HeaderValue::from_static("include"));

        #[cfg(not(target_arch = "wasm32"))]
        let client = ClientBuilder::new()
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        #[cfg(target_arch = "wasm32")]
        let client = {
            // Timeouts not supported on WASM
            let _ = self.timeout;
            ClientBuilder::new().default_headers(headers).build()?
        };

        Ok(ApiClient {
            client,
            base_url,
            tokens: self.tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_base_url() {
        let result = ApiClient::builder().build();
        assert!(matches!(result, Err(ApiError::Configuration(_))));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
