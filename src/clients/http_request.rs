//! Request descriptor types for the Shoper API client.
//!
//! This module provides the [`ApiRequest`] type and its builder for
//! describing one API call. Descriptors are transient: constructed per call
//! and discarded after the response or error.

use std::collections::HashMap;
use std::fmt;

/// HTTP methods supported by the Shoper REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for listing and retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// A request to be sent to the Shoper API.
///
/// Use [`ApiRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use shoper_api::{ApiRequest, HttpMethod};
/// use serde_json::json;
///
/// let list = ApiRequest::builder(HttpMethod::Get, "products")
///     .query_param("limit", "50")
///     .build();
///
/// let create = ApiRequest::builder(HttpMethod::Post, "products")
///     .body(json!({"translations": {"pl_PL": {"name": "Widget"}}}))
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint path, relative to the API base URL.
    pub endpoint: String,
    /// Query parameters to append to the URL.
    pub query: Option<HashMap<String, String>>,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a new builder for constructing an `ApiRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> ApiRequestBuilder {
        ApiRequestBuilder::new(method, endpoint)
    }
}

/// Builder for constructing [`ApiRequest`] instances.
#[derive(Debug)]
pub struct ApiRequestBuilder {
    method: HttpMethod,
    endpoint: String,
    query: Option<HashMap<String, String>>,
    body: Option<serde_json::Value>,
}

impl ApiRequestBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: None,
            body: None,
        }
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the [`ApiRequest`].
    #[must_use]
    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            endpoint: self.endpoint,
            query: self.query,
            body: self.body,
        }
    }
}
