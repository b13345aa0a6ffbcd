//! # Shoper API Rust Client
//!
//! A Rust client for the Shoper e-commerce platform's REST API, providing
//! authenticated transport with automatic rate-limit and token-expiry
//! recovery, plus a generic resource façade covering every endpoint the
//! platform exposes.
//!
//! ## Overview
//!
//! The crate has two collaborating layers:
//!
//! - [`HttpClient`]: issues authenticated HTTP requests, manages the
//!   bearer-token lifecycle (`POST {base}/auth` with HTTP Basic credentials),
//!   waits out HTTP 429 responses using the platform's leaky-bucket headers,
//!   and silently refreshes the token on HTTP 401. Retries are bounded by
//!   [`MAX_RETRIES`].
//! - [`ShoperClient`] + [`Resource`]: address any REST resource by name.
//!   `client.resource("order_status")` binds a proxy to the `order-status`
//!   path (underscores translate to hyphens) exposing `list`, `get`,
//!   `create`, `update`, and `delete`. Proxies compose for nested paths.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shoper_api::{ApiUrl, ClientId, ClientSecret, ShoperClient, ShoperConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ShoperConfig::builder()
//!     .api_url(ApiUrl::new("https://shop.example/webapi/rest")?)
//!     .client_id(ClientId::new("my-client-id")?)
//!     .client_secret(ClientSecret::new("my-secret")?)
//!     .build()?;
//!
//! let client = ShoperClient::new(&config);
//!
//! // Acquire a token (stored in place; refreshed automatically on 401)
//! client.acquire_token(None, None).await?;
//!
//! // GET https://shop.example/webapi/rest/products
//! let products = client.resource("products").list(None).await?;
//!
//! // GET https://shop.example/webapi/rest/order-status/7
//! let status = client.resource("order_status").get(7, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Callers see either a decoded JSON success payload or a single
//! [`ApiError`]; no partial results are ever returned. Rate limiting and
//! token expiry are recovered transparently and only surface as errors once
//! the retry ceiling is reached or the refresh itself fails.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: clients are `Send + Sync`; token state is lock-guarded
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::AccessTokenResponse;
pub use clients::{
    ApiError, ApiRequest, ApiRequestBuilder, ApiResponseError, HttpClient, HttpMethod,
    InvalidEndpointError, MaxRetriesExceededError, RateLimit, BANDWIDTH_HEADER, CLIENT_VERSION,
    DEFAULT_RETRY_WAIT, LIMIT_HEADER, MAX_RETRIES,
};
pub use config::{ApiUrl, ClientId, ClientSecret, ShoperConfig, ShoperConfigBuilder};
pub use error::ConfigError;
pub use rest::{Resource, ShoperClient};
