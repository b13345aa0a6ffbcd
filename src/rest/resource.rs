//! Path-bound resource proxies.
//!
//! A [`Resource`] pairs a borrowed transport with one REST resource path and
//! exposes the fixed verb operations (`list`, `get`, `create`, `update`,
//! `delete`). Proxies are created fresh by
//! [`ShoperClient::resource`](crate::ShoperClient::resource) on every call and
//! hold no state beyond the path.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::ApiError;
use crate::clients::HttpClient;
use crate::rest::path;

/// A proxy for one REST resource collection.
///
/// The proxy is purely structural: it maps verb calls onto paths without
/// validating that the resource exists remotely. An invalid name surfaces as
/// a remote 4xx error at call time.
///
/// # Example
///
/// ```rust,ignore
/// let client = ShoperClient::new(&config);
///
/// // GET {base}/products
/// let products = client.resource("products").list(None).await?;
///
/// // GET {base}/order-status/7
/// let status = client.resource("order_status").get(7, None).await?;
///
/// // GET {base}/products/images/19
/// let image = client.resource("products").child("images").get(19, None).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Resource<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> Resource<'a> {
    pub(crate) fn new(http: &'a HttpClient, name: &str) -> Self {
        Self {
            http,
            path: path::resource_segment(name),
        }
    }

    /// Returns the REST path this proxy is bound to.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns a proxy for a resource nested under this one.
    ///
    /// The child name gets the same underscore-to-hyphen translation as
    /// top-level names.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self {
            http: self.http,
            path: path::join(&self.path, &path::resource_segment(name)),
        }
    }

    /// Lists the collection: `GET {base}/{path}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for remote rejections, retry exhaustion, or
    /// network failures.
    pub async fn list(
        &self,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        self.http.get(&self.path, query).await
    }

    /// Retrieves one item: `GET {base}/{path}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for remote rejections, retry exhaustion, or
    /// network failures.
    pub async fn get(
        &self,
        id: impl fmt::Display + Send,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        self.http.get(&self.item_path(&id), query).await
    }

    /// Creates an item: `POST {base}/{path}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for remote rejections, retry exhaustion, or
    /// network failures.
    pub async fn create(
        &self,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        self.http.post(&self.path, Some(body), query).await
    }

    /// Updates one item: `PUT {base}/{path}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for remote rejections, retry exhaustion, or
    /// network failures.
    pub async fn update(
        &self,
        id: impl fmt::Display + Send,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        self.http.put(&self.item_path(&id), Some(body), query).await
    }

    /// Deletes one item: `DELETE {base}/{path}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for remote rejections, retry exhaustion, or
    /// network failures.
    pub async fn delete(
        &self,
        id: impl fmt::Display + Send,
        query: Option<HashMap<String, String>>,
    ) -> Result<serde_json::Value, ApiError> {
        self.http.delete(&self.item_path(&id), query).await
    }

    fn item_path(&self, id: &impl fmt::Display) -> String {
        path::join(&self.path, &id.to_string())
    }
}
