//! Configuration types for the Shoper API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ShoperConfig`]: The configuration struct holding all client settings
//! - [`ShoperConfigBuilder`]: A builder for constructing [`ShoperConfig`] instances
//! - [`ApiUrl`]: A validated REST API base URL
//! - [`ClientId`]: A validated client id newtype
//! - [`ClientSecret`]: A validated client secret newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use shoper_api::{ShoperConfig, ApiUrl, ClientId, ClientSecret};
//!
//! let config = ShoperConfig::builder()
//!     .api_url(ApiUrl::new("https://shop.example/webapi/rest").unwrap())
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiUrl, ClientId, ClientSecret};

use crate::error::ConfigError;

/// Configuration for the Shoper API client.
///
/// Holds the REST API base URL, optional OAuth credentials, and optional
/// pre-existing tokens. There is no file or environment based configuration;
/// everything is passed explicitly.
///
/// Credentials may be omitted when a valid access token is supplied up front,
/// but token refresh on HTTP 401 then fails with
/// [`ApiError::MissingCredentials`](crate::ApiError::MissingCredentials).
///
/// # Thread Safety
///
/// `ShoperConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ShoperConfig {
    api_url: ApiUrl,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl ShoperConfig {
    /// Creates a new builder for constructing a `ShoperConfig`.
    #[must_use]
    pub fn builder() -> ShoperConfigBuilder {
        ShoperConfigBuilder::new()
    }

    /// Returns the REST API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the client id, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the client secret, if configured.
    #[must_use]
    pub const fn client_secret(&self) -> Option<&ClientSecret> {
        self.client_secret.as_ref()
    }

    /// Returns the pre-existing access token, if configured.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns the pre-existing refresh token, if configured.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }
}

/// Builder for constructing [`ShoperConfig`] instances.
///
/// Only the API URL is required; all other fields are optional.
#[derive(Debug, Default)]
pub struct ShoperConfigBuilder {
    api_url: Option<ApiUrl>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl ShoperConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the REST API base URL (required).
    #[must_use]
    pub fn api_url(mut self, api_url: ApiUrl) -> Self {
        self.api_url = Some(api_url);
        self
    }

    /// Sets the client id used for token acquisition.
    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    /// Sets the client secret used for token acquisition.
    #[must_use]
    pub fn client_secret(mut self, client_secret: ClientSecret) -> Self {
        self.client_secret = Some(client_secret);
        self
    }

    /// Sets a pre-existing access token.
    #[must_use]
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// Sets a pre-existing refresh token.
    #[must_use]
    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Builds the [`ShoperConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if the API URL was not set.
    pub fn build(self) -> Result<ShoperConfig, ConfigError> {
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;

        Ok(ShoperConfig {
            api_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
            access_token: self.access_token,
            refresh_token: self.refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_url() {
        let result = ShoperConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_url" })
        ));
    }

    #[test]
    fn test_builder_with_api_url_only() {
        let config = ShoperConfig::builder()
            .api_url(ApiUrl::new("https://shop.example/webapi/rest").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_url().as_ref(), "https://shop.example/webapi/rest");
        assert!(config.client_id().is_none());
        assert!(config.client_secret().is_none());
        assert!(config.access_token().is_none());
        assert!(config.refresh_token().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = ShoperConfig::builder()
            .api_url(ApiUrl::new("https://shop.example/webapi/rest").unwrap())
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .access_token("token")
            .refresh_token("refresh")
            .build()
            .unwrap();

        assert_eq!(config.client_id().unwrap().as_ref(), "id");
        assert_eq!(config.client_secret().unwrap().as_ref(), "secret");
        assert_eq!(config.access_token(), Some("token"));
        assert_eq!(config.refresh_token(), Some("refresh"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShoperConfig>();
    }
}
