//! Scripted transport for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use super::{Dispatcher, ResetRequest, ResetResponse};

/// A scripted dispatcher. Returns pre-defined results in order and
/// records every request it was given.
pub struct MockDispatcher {
    results: Mutex<VecDeque<Result<ResetResponse>>>,
    requests: Mutex<Vec<ResetRequest>>,
}

impl MockDispatcher {
    pub fn new(results: Vec<Result<ResetResponse>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request this dispatcher has seen, in order.
    pub fn requests(&self) -> Vec<ResetRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Dispatcher for MockDispatcher {
    async fn post(&self, request: &ResetRequest) -> Result<ResetResponse> {
        let calls = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len()
        };
        self.results.lock().unwrap().pop_front().ok_or_else(|| {
            anyhow::anyhow!("MockDispatcher: no more scripted results (called {} times)", calls)
        })?
    }
}
