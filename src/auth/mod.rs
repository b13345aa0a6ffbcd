//! Authentication state and token types for the Shoper API client.
//!
//! Shoper issues bearer tokens from `POST {base}/auth` using HTTP Basic
//! credentials. The client stores the resulting access and refresh tokens and
//! overwrites them in place on every successful acquisition, including the
//! silent refresh performed when a request receives HTTP 401.

use serde::Deserialize;

use crate::config::{ClientId, ClientSecret, ShoperConfig};

/// Mutable authentication state owned by one [`HttpClient`](crate::HttpClient).
///
/// Held behind a `tokio::sync::RwLock` inside the client so that a token
/// refresh is visible to every subsequent request attempt.
#[derive(Clone, Debug, Default)]
pub(crate) struct AuthState {
    /// Client id used for token acquisition.
    pub client_id: Option<ClientId>,
    /// Client secret used for token acquisition.
    pub client_secret: Option<ClientSecret>,
    /// Current bearer token sent in the `Authorization` header.
    pub access_token: Option<String>,
    /// Token presented to obtain a new access token.
    pub refresh_token: Option<String>,
}

impl AuthState {
    /// Seeds the state from configuration values.
    pub fn from_config(config: &ShoperConfig) -> Self {
        Self {
            client_id: config.client_id().cloned(),
            client_secret: config.client_secret().cloned(),
            access_token: config.access_token().map(ToOwned::to_owned),
            refresh_token: config.refresh_token().map(ToOwned::to_owned),
        }
    }

    /// Overwrites both stored tokens with freshly issued ones.
    pub fn store_tokens(&mut self, tokens: &AccessTokenResponse) {
        self.access_token = Some(tokens.access_token.clone());
        self.refresh_token = Some(tokens.refresh_token.clone());
    }
}

/// Successful response body from `POST {base}/auth`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// The bearer token for subsequent API calls.
    pub access_token: String,
    /// The token used to obtain the next access token.
    pub refresh_token: String,
    /// Lifetime of the access token in seconds, when reported.
    #[serde(default)]
    pub expires_in: Option<u64>,
    /// Token type reported by the server (normally `"bearer"`).
    #[serde(default)]
    pub token_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiUrl;

    fn token_response(access: &str, refresh: &str) -> AccessTokenResponse {
        AccessTokenResponse {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
            expires_in: None,
            token_type: None,
        }
    }

    #[test]
    fn test_from_config_copies_all_fields() {
        let config = ShoperConfig::builder()
            .api_url(ApiUrl::new("https://shop.example/webapi/rest").unwrap())
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .access_token("token")
            .refresh_token("refresh")
            .build()
            .unwrap();

        let state = AuthState::from_config(&config);
        assert_eq!(state.client_id.unwrap().as_ref(), "id");
        assert_eq!(state.client_secret.unwrap().as_ref(), "secret");
        assert_eq!(state.access_token.as_deref(), Some("token"));
        assert_eq!(state.refresh_token.as_deref(), Some("refresh"));
    }

    #[test]
    fn test_store_tokens_overwrites_both_tokens() {
        let mut state = AuthState {
            access_token: Some("old-access".to_string()),
            refresh_token: Some("old-refresh".to_string()),
            ..AuthState::default()
        };

        state.store_tokens(&token_response("new-access", "new-refresh"));

        assert_eq!(state.access_token.as_deref(), Some("new-access"));
        assert_eq!(state.refresh_token.as_deref(), Some("new-refresh"));
    }

    #[test]
    fn test_access_token_response_deserializes_extra_fields() {
        let json = serde_json::json!({
            "access_token": "abc",
            "refresh_token": "def",
            "expires_in": 2_592_000,
            "token_type": "bearer"
        });

        let tokens: AccessTokenResponse = serde_json::from_value(json).unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.refresh_token, "def");
        assert_eq!(tokens.expires_in, Some(2_592_000));
        assert_eq!(tokens.token_type.as_deref(), Some("bearer"));
    }

    #[test]
    fn test_access_token_response_requires_both_tokens() {
        let json = serde_json::json!({ "access_token": "abc" });
        let result: Result<AccessTokenResponse, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }
}
