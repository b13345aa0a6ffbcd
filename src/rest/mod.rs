//! Endpoint façade for the Shoper REST API.
//!
//! This module provides [`ShoperClient`], the top-level entry point, and
//! [`Resource`], the path-bound proxy it hands out. Any resource the remote
//! API exposes can be addressed by name; the client imposes no fixed method
//! per resource.

mod path;
mod resource;

pub use resource::Resource;

use crate::clients::errors::ApiError;
use crate::clients::HttpClient;
use crate::config::{ClientId, ClientSecret, ShoperConfig};

/// Client for the Shoper REST API.
///
/// Wraps the transport layer with a resource factory: `resource(name)`
/// returns a fresh proxy bound to the translated path, and the proxy's verb
/// methods perform the actual calls. Token acquisition and refresh are
/// handled by the underlying [`HttpClient`].
///
/// # Example
///
/// ```rust,ignore
/// use shoper_api::{ApiUrl, ClientId, ClientSecret, ShoperClient, ShoperConfig};
///
/// let config = ShoperConfig::builder()
///     .api_url(ApiUrl::new("https://shop.example/webapi/rest")?)
///     .client_id(ClientId::new("my-client-id")?)
///     .client_secret(ClientSecret::new("my-secret")?)
///     .build()?;
///
/// let client = ShoperClient::new(&config);
/// client.acquire_token(None, None).await?;
///
/// let products = client.resource("products").list(None).await?;
/// ```
#[derive(Debug)]
pub struct ShoperClient {
    http: HttpClient,
}

// Verify ShoperClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShoperClient>();
};

impl ShoperClient {
    /// Creates a new client for the given configuration.
    #[must_use]
    pub fn new(config: &ShoperConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Returns a proxy for the named resource.
    ///
    /// Underscores in the name are translated to hyphens, so
    /// `resource("order_status")` addresses `{base}/order-status`. A fresh
    /// proxy is created on every call.
    #[must_use]
    pub fn resource(&self, name: &str) -> Resource<'_> {
        Resource::new(&self.http, name)
    }

    /// Acquires a bearer token, delegating to [`HttpClient::acquire_token`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] as documented on [`HttpClient::acquire_token`].
    pub async fn acquire_token(
        &self,
        client_id: Option<ClientId>,
        client_secret: Option<ClientSecret>,
    ) -> Result<serde_json::Value, ApiError> {
        self.http.acquire_token(client_id, client_secret).await
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &HttpClient {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiUrl;

    fn create_test_config() -> ShoperConfig {
        ShoperConfig::builder()
            .api_url(ApiUrl::new("https://shop.example/webapi/rest").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_resource_factory_translates_name() {
        let client = ShoperClient::new(&create_test_config());
        assert_eq!(client.resource("order_status").path(), "order-status");
    }

    #[test]
    fn test_resource_factory_creates_fresh_proxies() {
        let client = ShoperClient::new(&create_test_config());
        let first = client.resource("products");
        let second = client.resource("products");
        assert_eq!(first.path(), second.path());
    }

    #[test]
    fn test_http_exposes_transport() {
        let client = ShoperClient::new(&create_test_config());
        assert_eq!(client.http().base_url(), "https://shop.example/webapi/rest");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShoperClient>();
    }
}
