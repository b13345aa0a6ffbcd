//! HTTP transport for Shoper API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Shoper REST API with automatic recovery from rate
//! limiting (HTTP 429) and expired tokens (HTTP 401).

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::auth::{AccessTokenResponse, AuthState};
use crate::clients::errors::{
    ApiError, ApiResponseError, InvalidEndpointError, MaxRetriesExceededError,
};
use crate::clients::http_request::{ApiRequest, HttpMethod};
use crate::clients::http_response::{decode_body, RateLimit};
use crate::config::{ClientId, ClientSecret, ShoperConfig};

/// Maximum number of attempts per logical request, counting the first send.
pub const MAX_RETRIES: u32 = 10;

/// Wait time applied to a 429 response whose rate-limit headers are unusable.
pub const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(1);

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for the Shoper REST API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Bearer-token authorization and fixed default headers
/// - Token acquisition via `POST {base}/auth` with HTTP Basic credentials
/// - Automatic retry for 429 (timed backoff) and 401 (token refresh)
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Token state lives behind a `tokio` lock, so
/// one client may be shared across tasks; a refresh performed by one request
/// is visible to every later attempt.
///
/// # Example
///
/// ```rust,ignore
/// use shoper_api::{ApiRequest, HttpClient, HttpMethod, ShoperConfig, ApiUrl};
///
/// let config = ShoperConfig::builder()
///     .api_url(ApiUrl::new("https://shop.example/webapi/rest")?)
///     .access_token("token")
///     .build()?;
///
/// let client = HttpClient::new(&config);
/// let body = client.get("products", None).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL, without a trailing slash (e.g., `https://shop.example/webapi/rest`).
    base_url: String,
    /// User-Agent header sent with every request.
    user_agent: String,
    /// Credentials and current tokens; tokens are overwritten on refresh.
    auth: RwLock<AuthState>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &ShoperConfig) -> Self {
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Shoper API Client v{CLIENT_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.api_url().as_ref().to_string(),
            user_agent,
            auth: RwLock::new(AuthState::from_config(config)),
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the current access token, if one is held.
    pub async fn access_token(&self) -> Option<String> {
        self.auth.read().await.access_token.clone()
    }

    /// Returns the current refresh token, if one is held.
    pub async fn refresh_token(&self) -> Option<String> {
        self.auth.read().await.refresh_token.clone()
    }

    /// Acquires a bearer token from `POST {base}/auth` using HTTP Basic credentials.
    ///
    /// Parameters passed here overwrite the stored credentials before the
    /// call, matching the constructor-or-parameter contract: both must be set
    /// by one of the two routes. On success the stored access and refresh
    /// tokens are both replaced and the decoded response body is returned.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingCredentials`] if either credential is still unset
    /// - [`ApiError::Response`] for a non-2xx response, wrapping the decoded body
    /// - [`ApiError::Decode`] if a 2xx body lacks the token fields
    /// - [`ApiError::Network`] for connection-level failures
    pub async fn acquire_token(
        &self,
        client_id: Option<ClientId>,
        client_secret: Option<ClientSecret>,
    ) -> Result<serde_json::Value, ApiError> {
        tracing::info!("Requesting access token");

        let (id, secret) = {
            let mut state = self.auth.write().await;
            if let Some(id) = client_id {
                state.client_id = Some(id);
            }
            if let Some(secret) = client_secret {
                state.client_secret = Some(secret);
            }
            match (&state.client_id, &state.client_secret) {
                (Some(id), Some(secret)) => (id.clone(), secret.clone()),
                _ => return Err(ApiError::MissingCredentials),
            }
        };

        let url = format!("{}/auth", self.base_url);
        let response = self
            .client
            .post(&url)
            .basic_auth(id.as_ref(), Some(secret.as_ref()))
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        let code = response.status().as_u16();
        let text = response.text().await.unwrap_or_default();
        let body = decode_body(&text);

        if code >= 400 {
            tracing::error!("Failed to get access token (HTTP {code})");
            return Err(ApiError::Response(ApiResponseError { code, body }));
        }

        let tokens: AccessTokenResponse = serde_json::from_value(body.clone())?;
        self.auth.write().await.store_tokens(&tokens);

        tracing::info!("Access token acquired");

        Ok(body)
    }

    /// Sends a request to the Shoper API, retrying recoverable responses.
    ///
    /// The retry loop is bounded: at most [`MAX_RETRIES`] attempts are sent,
    /// and reaching the ceiling fails before any further network traffic.
    /// Within the loop:
    ///
    /// - HTTP 429 waits `limit / bandwidth` seconds (from the
    ///   `X-SHOP-API-LIMIT` / `X-SHOP-API-BANDWIDTH` headers) and retries
    /// - HTTP 401 refreshes the token via [`acquire_token`](Self::acquire_token)
    ///   with stored credentials and retries; a failed refresh aborts with
    ///   its own error
    /// - any other status >= 400 fails with the decoded error body
    /// - a 2xx response returns the decoded JSON body
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] as described above; network errors propagate as
    /// [`ApiError::Network`] without retry.
    pub async fn request(&self, request: ApiRequest) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint_url(&request.endpoint)?;

        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            if attempts > MAX_RETRIES {
                tracing::error!("Maximum retries reached for {url}");
                return Err(ApiError::MaxRetries(MaxRetriesExceededError {
                    tries: MAX_RETRIES,
                    endpoint: request.endpoint.clone(),
                }));
            }

            tracing::info!("{} request: {}", request.method, url);
            if let Some(body) = &request.body {
                tracing::info!("Payload: {body}");
            }
            if let Some(query) = &request.query {
                tracing::info!("Params: {query:?}");
            }

            let mut builder = match request.method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            builder = builder
                .header("User-Agent", &self.user_agent)
                .header("Accept", "application/json")
                .header("Content-Type", "application/json");

            // Read the token fresh each attempt so a mid-loop refresh takes effect.
            if let Some(token) = self.access_token().await {
                builder = builder.bearer_auth(token);
            }

            if let Some(query) = &request.query {
                builder = builder.query(query);
            }
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let response = builder.send().await?;
            let code = response.status().as_u16();

            if code == 429 {
                let wait = RateLimit::from_headers(response.headers())
                    .map_or(DEFAULT_RETRY_WAIT, |limit| limit.wait_interval());
                tracing::info!("HTTP 429: rate limited, waiting {:.3}s", wait.as_secs_f64());
                tokio::time::sleep(wait).await;
                continue;
            }

            if code == 401 {
                tracing::info!("HTTP 401: refreshing access token");
                self.acquire_token(None, None).await?;
                continue;
            }

            let text = response.text().await.unwrap_or_default();
            let body = decode_body(&text);

            if code >= 400 {
                return Err(ApiError::Response(ApiResponseError { code, body }));
            }

            return Ok(body);
        }
    }

    /// Sends a GET request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for invalid endpoints, remote rejections, retry
    /// exhaustion, or network failures.
    pub async fn get(
        &self,
        endpoint: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        let mut builder = ApiRequest::builder(HttpMethod::Get, endpoint);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()).await
    }

    /// Sends a POST request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for invalid endpoints, remote rejections, retry
    /// exhaustion, or network failures.
    pub async fn post(
        &self,
        endpoint: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        let mut builder = ApiRequest::builder(HttpMethod::Post, endpoint);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()).await
    }

    /// Sends a PUT request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for invalid endpoints, remote rejections, retry
    /// exhaustion, or network failures.
    pub async fn put(
        &self,
        endpoint: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        let mut builder = ApiRequest::builder(HttpMethod::Put, endpoint);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()).await
    }

    /// Sends a DELETE request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for invalid endpoints, remote rejections, retry
    /// exhaustion, or network failures.
    pub async fn delete(
        &self,
        endpoint: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        let mut builder = ApiRequest::builder(HttpMethod::Delete, endpoint);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.request(builder.build()).await
    }

    /// Builds the full URL for an endpoint.
    ///
    /// Endpoints ending in a path separator are rejected up front rather than
    /// silently producing an invalid request.
    fn endpoint_url(&self, endpoint: &str) -> Result<String, InvalidEndpointError> {
        let trimmed = endpoint.trim_start_matches('/');
        if trimmed.is_empty() || trimmed.ends_with('/') {
            return Err(InvalidEndpointError {
                endpoint: endpoint.to_string(),
            });
        }
        Ok(format!("{}/{}", self.base_url, trimmed))
    }
}
