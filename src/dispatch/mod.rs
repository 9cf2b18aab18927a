//! The transport seam.
//!
//! Requests and responses are plain data; the [`Dispatcher`] trait is the
//! only place the network is touched. Production uses the reqwest-backed
//! [`http::HttpDispatcher`]; tests script a [`mock::MockDispatcher`].

pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::consts::CONTENT_TYPE_JSON;

/// A reset request described as plain data.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ResetRequest {
    /// The fixed shape every reset uses: the given endpoint, a single
    /// `Content-Type: application/json` header, an empty body.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            headers: vec![("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())],
            body: String::new(),
        }
    }
}

/// What the server answered with. Only the status code matters here; the
/// reply body is never consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetResponse {
    pub status: u16,
}

/// The wire. Could be reqwest, or a script standing in for it.
///
/// `Err` means the HTTP exchange itself failed (connection refused, DNS
/// failure, timeout). A response with *any* status code is `Ok`;
/// classifying statuses is not the transport's job.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn post(&self, request: &ResetRequest) -> Result<ResetResponse>;
}
