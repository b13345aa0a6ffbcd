//! Response parsing helpers for the Shoper API client.
//!
//! This module provides [`RateLimit`] for the leaky-bucket throttle headers
//! Shoper attaches to HTTP 429 responses, and the JSON body decoding shared
//! by the transport layer.

use std::time::Duration;

use reqwest::header::HeaderMap;

/// Name of the header carrying the bucket refill rate.
pub const BANDWIDTH_HEADER: &str = "X-SHOP-API-BANDWIDTH";

/// Name of the header carrying the bucket size.
pub const LIMIT_HEADER: &str = "X-SHOP-API-LIMIT";

/// Leaky-bucket rate limit information from an HTTP 429 response.
///
/// Shoper reports the throttle via two integer-valued headers:
/// `X-SHOP-API-BANDWIDTH` (requests drained per interval) and
/// `X-SHOP-API-LIMIT` (bucket size). The wait before retrying is
/// `limit / bandwidth` seconds, with no jitter.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shoper_api::RateLimit;
///
/// let limit = RateLimit { bandwidth: 50, limit: 100 };
/// assert_eq!(limit.wait_interval(), Duration::from_secs(2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests drained from the bucket per interval.
    pub bandwidth: u64,
    /// Size of the bucket.
    pub limit: u64,
}

impl RateLimit {
    /// Parses the rate-limit headers from a response.
    ///
    /// Returns `None` when either header is missing, non-numeric, or the
    /// bandwidth is zero (which would make the wait interval undefined).
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let bandwidth = parse_header(headers, BANDWIDTH_HEADER)?;
        let limit = parse_header(headers, LIMIT_HEADER)?;

        if bandwidth == 0 {
            return None;
        }

        Some(Self { bandwidth, limit })
    }

    /// Returns how long to wait before re-issuing the throttled request.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn wait_interval(&self) -> Duration {
        Duration::from_secs_f64(self.limit as f64 / self.bandwidth as f64)
    }
}

fn parse_header(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Decodes a response body into JSON.
///
/// Empty bodies decode to `{}`; bodies that are not valid JSON are wrapped
/// as `{"raw_body": "..."}` so the caller always receives a value.
pub(crate) fn decode_body(text: &str) -> serde_json::Value {
    if text.is_empty() {
        return serde_json::json!({});
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
}
