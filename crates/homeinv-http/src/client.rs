//! HTTP client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
    middleware::RequestLogger,
};

/// A request against the API, with a path relative to the base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| HttpError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Status line and body of a response, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Reason phrase for the status, e.g. `Not Found`
    pub reason: String,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Mockable HTTP client trait
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// Execute a request. Error statuses are returned as responses.
    async fn request(&self, request: ApiRequest) -> Result<RawResponse>;

    /// Execute a GET request
    async fn get(&self, path: &str) -> Result<RawResponse> {
        self.request(ApiRequest::get(path)).await
    }

    /// Execute a DELETE request
    async fn delete(&self, path: &str) -> Result<RawResponse> {
        self.request(ApiRequest::delete(path)).await
    }
}

/// Production HTTP client
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
    base: Url,
    logger: RequestLogger,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .redirect(if config.max_redirects > 0 {
                reqwest::redirect::Policy::limited(config.max_redirects)
            } else {
                reqwest::redirect::Policy::none()
            });

        // Configure proxy if provided
        if let Some(proxy_url) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| HttpError::InvalidProxy(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        // Configure connection pooling
        if config.pool_enabled {
            builder = builder.pool_idle_timeout(config.pool_idle_timeout);
        } else {
            builder = builder.pool_max_idle_per_host(0);
        }

        let inner = builder
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self {
            inner,
            config,
            base,
            logger: RequestLogger::new(),
        })
    }

    /// Create HTTP client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// Get configuration
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Resolve a request path and query against the base URL
    pub fn resolve(&self, path: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = self
            .base
            .join(path.trim_start_matches('/'))
            .map_err(|e| HttpError::InvalidUrl(format!("{path}: {e}")))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    async fn send(&self, method: Method, url: Url, body: Option<serde_json::Value>) -> Result<RawResponse> {
        let mut request = self.inner.request(method, url);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(e, self.config.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::from_reqwest(e, self.config.timeout))?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn request(&self, request: ApiRequest) -> Result<RawResponse> {
        let url = self.resolve(&request.path, &request.query)?;
        let label = url.to_string();
        self.logger
            .execute(&request.method, &label, self.send(request.method.clone(), url, request.body))
            .await
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    // Url::join drops the last segment unless the base ends with a slash
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized).map_err(|e| HttpError::InvalidUrl(format!("{raw}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(HttpError::InvalidUrl(format!("{raw}: not a base URL")));
    }
    Ok(url)
}

/// Create a shared HTTP client (Arc-wrapped for cloning)
pub fn shared_client(config: HttpConfig) -> Result<Arc<dyn HttpClientTrait>> {
    Ok(Arc::new(HttpClient::new(config)?))
}
