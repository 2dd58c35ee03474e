//! Transport seam
//!
//! Request and response shapes exchanged with whatever performs the HTTP call.

use crate::error::Result;
use crate::types::{Method, QueryParams};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::Arc;

/// One HTTP call, described without reference to any client library
#[derive(Debug, Clone, Default)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base, starting with `/`
    pub path: String,
    /// Ordered query parameters
    pub query: QueryParams,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Optional JSON body
    pub body: Option<Bytes>,
}

impl TransportRequest {
    /// Create a request for `path`
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    /// Shorthand for a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Replace the query parameters
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set a JSON body
    #[must_use]
    pub fn json_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Path plus encoded query, for logging
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.encode())
        }
    }
}

/// Raw outcome of one HTTP call
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, unparsed
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single HTTP call.
///
/// Implementations return `Ok` for every HTTP status; only failures to
/// complete the exchange (DNS, connect, timeout, body read) are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse> {
        (**self).execute(request).await
    }
}
