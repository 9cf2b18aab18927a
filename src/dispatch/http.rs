//! reqwest-backed production transport.

use anyhow::Result;
use async_trait::async_trait;

use super::{Dispatcher, ResetRequest, ResetResponse};

/// Sends reset requests over real HTTP. The client keeps reqwest's
/// defaults: no retries here, and no timeout beyond the client's own.
pub struct HttpDispatcher {
    client: reqwest::Client,
}

impl HttpDispatcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn post(&self, request: &ResetRequest) -> Result<ResetResponse> {
        let mut builder = self.client.post(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder.body(request.body.clone()).send().await?;
        Ok(ResetResponse {
            status: response.status().as_u16(),
        })
    }
}
