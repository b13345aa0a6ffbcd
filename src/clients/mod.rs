//! Transport layer for the Shoper REST API.
//!
//! This module contains the HTTP client and its supporting request, response,
//! and error types:
//!
//! - [`HttpClient`]: authenticated transport with automatic 429/401 recovery
//! - [`ApiRequest`] / [`ApiRequestBuilder`]: per-call request descriptors
//! - [`RateLimit`]: parsed leaky-bucket throttle headers
//! - [`ApiError`] and friends: typed failures

pub mod errors;
pub mod http_client;
pub mod http_request;
pub mod http_response;

pub use errors::{ApiError, ApiResponseError, InvalidEndpointError, MaxRetriesExceededError};
pub use http_client::{HttpClient, CLIENT_VERSION, DEFAULT_RETRY_WAIT, MAX_RETRIES};
pub use http_request::{ApiRequest, ApiRequestBuilder, HttpMethod};
pub use http_response::{RateLimit, BANDWIDTH_HEADER, LIMIT_HEADER};
