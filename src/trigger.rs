//! The reset trigger: one fixed POST, one outcome.
//!
//! Builds the request described by [`ResetRequest::new`], hands it to a
//! [`Dispatcher`] exactly once, and folds the result into a two-branch
//! [`ResetOutcome`]. Failures are information, not errors to propagate;
//! there is no caller to hand them to.

use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use crate::consts::DEFAULT_RESET_URL;
use crate::dispatch::{Dispatcher, ResetRequest};

/// How a single reset attempt ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResetOutcome {
    /// The server answered. Carries whatever status came back, 500 included.
    Completed { status: u16 },
    /// The exchange itself failed before any status arrived.
    Failed { error: String },
}

/// Fires one POST at the reset endpoint and reports how it went.
#[derive(Clone)]
pub struct ResetTrigger {
    dispatcher: Arc<dyn Dispatcher>,
    url: String,
}

impl ResetTrigger {
    pub fn new(dispatcher: Arc<dyn Dispatcher>, url: impl Into<String>) -> Self {
        Self {
            dispatcher,
            url: url.into(),
        }
    }

    /// Trigger aimed at the standard local test server.
    pub fn with_default_url(dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self::new(dispatcher, DEFAULT_RESET_URL)
    }

    /// The fixed request this trigger sends.
    pub fn request(&self) -> ResetRequest {
        ResetRequest::new(&self.url)
    }

    /// Dispatch once and fold the result into an outcome. No retries.
    pub async fn run(&self) -> ResetOutcome {
        match self.dispatcher.post(&self.request()).await {
            Ok(response) => ResetOutcome::Completed {
                status: response.status,
            },
            Err(err) => ResetOutcome::Failed {
                error: format!("{err:#}"),
            },
        }
    }

    /// Fire-and-forget: dispatch on the runtime without blocking the
    /// caller. `on_complete` is invoked exactly once, with either branch.
    pub fn spawn<F>(&self, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(ResetOutcome) + Send + 'static,
    {
        let trigger = self.clone();
        tokio::spawn(async move {
            on_complete(trigger.run().await);
        })
    }
}
