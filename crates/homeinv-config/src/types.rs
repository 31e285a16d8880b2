//! Configuration types

use std::time::Duration;

use homeinv_http::HttpConfig;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Remote inventory service
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Remote inventory service settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is resolved against
    pub base_url: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let http = HttpConfig::default();
        Self {
            base_url: http.base_url,
            request_timeout_secs: http.timeout.as_secs(),
            connect_timeout_secs: http.connect_timeout.as_secs(),
            user_agent: http.user_agent,
            proxy: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Transport settings for the HTTP client
    pub fn to_http_config(&self) -> HttpConfig {
        let config = HttpConfig::for_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_user_agent(self.user_agent.clone());
        match &self.proxy {
            Some(proxy) => config.with_proxy(proxy.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_transport() {
        let config = AppConfig::default();
        assert_eq!(config.api.request_timeout_secs, 15);
        assert_eq!(config.api.connect_timeout_secs, 15);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_to_http_config() {
        let api = ApiConfig {
            base_url: "http://inventory.local/api/".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
            user_agent: "homeinv-test".to_string(),
            proxy: Some("http://proxy.local:3128".to_string()),
        };

        let http = api.to_http_config();
        assert_eq!(http.base_url, "http://inventory.local/api/");
        assert_eq!(http.timeout, Duration::from_secs(5));
        assert_eq!(http.connect_timeout, Duration::from_secs(2));
        assert_eq!(http.user_agent, "homeinv-test");
        assert_eq!(http.proxy.as_deref(), Some("http://proxy.local:3128"));
    }
}
