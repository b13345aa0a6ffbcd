//! Error types for transport-layer operations.
//!
//! # Error Handling
//!
//! The client uses specific error types for different failure scenarios:
//!
//! - [`ApiResponseError`]: non-2xx HTTP responses from the API
//! - [`MaxRetriesExceededError`]: when the retry ceiling is reached
//! - [`InvalidEndpointError`]: when an endpoint string fails validation before sending
//! - [`ApiError`]: unified error type encompassing all client errors
//!
//! # Example
//!
//! ```rust,ignore
//! use shoper_api::ApiError;
//!
//! match client.request(request).await {
//!     Ok(body) => println!("Success: {body}"),
//!     Err(ApiError::Response(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(ApiError::MaxRetries(e)) => println!("Gave up after {} attempts", e.tries),
//!     Err(e) => println!("Other failure: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// Wraps the exact decoded JSON error body returned by the server; no
/// structure beyond the status code is imposed. Callers who need to
/// distinguish causes must inspect the body.
#[derive(Debug, Error)]
#[error("{body}")]
pub struct ApiResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The decoded JSON error body. Undecodable bodies are wrapped as
    /// `{"raw_body": "..."}`.
    pub body: serde_json::Value,
}

/// Error returned when the retry ceiling has been reached.
///
/// Raised before the request is re-sent; hitting the ceiling never produces
/// an extra network call.
#[derive(Debug, Error)]
#[error("Maximum retries ({tries}) reached for {endpoint}")]
pub struct MaxRetriesExceededError {
    /// The number of attempts that were made.
    pub tries: u32,
    /// The endpoint that kept failing.
    pub endpoint: String,
}

/// Error returned when an endpoint string fails validation.
///
/// Endpoints must be non-empty and must not end in a path separator. The
/// check happens before any network traffic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid endpoint '{endpoint}': must be non-empty and must not end with '/'")]
pub struct InvalidEndpointError {
    /// The endpoint string that was rejected.
    pub endpoint: String,
}

/// Unified error type for all client operations.
///
/// Provides a single error type at the API boundary; use pattern matching to
/// handle specific failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request (HTTP >= 400, excluding the
    /// automatically recovered 401 and 429).
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// The retry ceiling was reached without a successful response.
    #[error(transparent)]
    MaxRetries(#[from] MaxRetriesExceededError),

    /// The endpoint string failed validation.
    #[error(transparent)]
    InvalidEndpoint(#[from] InvalidEndpointError),

    /// Token acquisition was attempted without client credentials.
    #[error("Client credentials are not set. Provide client_id and client_secret before requesting a token.")]
    MissingCredentials,

    /// The token response body did not contain the expected fields.
    #[error("Malformed token response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error, propagated unchanged and never retried.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_error_displays_body() {
        let error = ApiResponseError {
            code: 404,
            body: json!({"error": "Not Found"}),
        };
        assert_eq!(error.to_string(), r#"{"error":"Not Found"}"#);
        assert_eq!(error.code, 404);
    }

    #[test]
    fn test_max_retries_error_includes_attempt_count() {
        let error = MaxRetriesExceededError {
            tries: 10,
            endpoint: "products".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("Maximum retries"));
        assert!(message.contains("10"));
        assert!(message.contains("products"));
    }

    #[test]
    fn test_invalid_endpoint_error_names_the_endpoint() {
        let error = InvalidEndpointError {
            endpoint: "products/".to_string(),
        };
        assert!(error.to_string().contains("products/"));
    }

    #[test]
    fn test_missing_credentials_message() {
        let error = ApiError::MissingCredentials;
        let message = error.to_string();
        assert!(message.contains("client_id"));
        assert!(message.contains("client_secret"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response: &dyn std::error::Error = &ApiResponseError {
            code: 400,
            body: json!({}),
        };
        let _ = response;

        let max_retries: &dyn std::error::Error = &MaxRetriesExceededError {
            tries: 10,
            endpoint: "x".to_string(),
        };
        let _ = max_retries;

        let invalid: &dyn std::error::Error = &InvalidEndpointError {
            endpoint: String::new(),
        };
        let _ = invalid;
    }

    #[test]
    fn test_api_error_from_conversions() {
        let error: ApiError = ApiResponseError {
            code: 422,
            body: json!({"error": "unprocessable"}),
        }
        .into();
        assert!(matches!(error, ApiError::Response(_)));

        let error: ApiError = InvalidEndpointError {
            endpoint: "bad/".to_string(),
        }
        .into();
        assert!(matches!(error, ApiError::InvalidEndpoint(_)));
    }
}
