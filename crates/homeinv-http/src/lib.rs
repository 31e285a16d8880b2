//! HTTP transport for the home inventory client
//!
//! Provides a mockable, configurable client for the inventory REST service.
//!
//! ## Features
//!
//! - **Trait-based design**: Mockable via `HttpClientTrait`
//! - **Status passthrough**: Non-success statuses are returned, not raised,
//!   so callers decide how to report them
//! - **Single attempt**: Requests are never retried
//! - **Request logging**: Method, URL, status and latency at debug level
//! - **Testing support**: Easy mocking with wiremock

pub mod client;
pub mod config;
pub mod error;
pub mod middleware;

pub use client::{shared_client, ApiRequest, HttpClient, HttpClientTrait, RawResponse};
pub use config::HttpConfig;
pub use error::{HttpError, Result};
pub use middleware::RequestLogger;

/// Re-export commonly used types
pub use reqwest::{Method, StatusCode};
