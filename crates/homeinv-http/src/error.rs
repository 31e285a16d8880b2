//! HTTP client error types

use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Transport-level failures. A response with an error status is not an
/// `HttpError`; it comes back as a [`RawResponse`](crate::RawResponse).
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid proxy configuration
    #[error("Invalid proxy configuration: {0}")]
    InvalidProxy(String),

    /// Request body could not be encoded
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Map a reqwest error, surfacing timeouts with the configured duration
    pub fn from_reqwest(error: reqwest::Error, timeout: std::time::Duration) -> Self {
        if error.is_timeout() {
            HttpError::Timeout(timeout)
        } else {
            HttpError::RequestFailed(error)
        }
    }
}
