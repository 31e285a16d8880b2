//! Request logging middleware

use std::{future::Future, time::Instant};

use reqwest::Method;
use tracing::{debug, warn};

use crate::{client::RawResponse, Result};

/// Logs each request once it settles: status and latency on completion,
/// the transport error otherwise. Never retries.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestLogger;

impl RequestLogger {
    pub fn new() -> Self {
        Self
    }

    /// Run `operation` and log its outcome
    pub async fn execute<Fut>(&self, method: &Method, url: &str, operation: Fut) -> Result<RawResponse>
    where
        Fut: Future<Output = Result<RawResponse>>,
    {
        debug!("HTTP {}: {}", method, url);
        let started = Instant::now();
        let result = operation.await;
        let elapsed = started.elapsed();

        match &result {
            Ok(response) => debug!(
                status = response.status,
                elapsed_ms = elapsed.as_millis() as u64,
                "HTTP {} {} completed",
                method,
                url
            ),
            Err(e) => warn!("HTTP {} {} failed after {:?}: {}", method, url, elapsed, e),
        }

        result
    }
}
