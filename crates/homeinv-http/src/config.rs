//! HTTP client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Root of the inventory API; request paths are resolved against it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request (read) timeout
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Connection timeout
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,

    /// HTTP/HTTPS proxy URL
    #[serde(default)]
    pub proxy: Option<String>,

    /// Custom user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum redirects to follow (0 = no redirects)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// Enable connection pooling
    #[serde(default = "default_pool_enabled")]
    pub pool_enabled: bool,

    /// Pool idle timeout
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            proxy: None,
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            pool_enabled: default_pool_enabled(),
            pool_idle_timeout: default_pool_idle_timeout(),
        }
    }
}

impl HttpConfig {
    /// Create a new HTTP config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Config pointing at `base_url` with default timeouts
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set proxy URL
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// Default value functions for serde
fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(15)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(15)
}

fn default_user_agent() -> String {
    format!("homeinv/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_redirects() -> usize {
    10
}

fn default_pool_enabled() -> bool {
    true
}

fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(90)
}
