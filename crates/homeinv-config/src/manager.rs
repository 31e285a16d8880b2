//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;
use url::Url;

use crate::{
    error::{ConfigError, Result},
    types::AppConfig,
};

const DEFAULT_ENV_PREFIX: &str = "HOMEINV";

/// Loads, validates and saves [`AppConfig`]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Create with custom config path
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// `<config dir>/homeinv/config.toml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homeinv")
            .join("config.toml")
    }

    /// Defaults, then the file if present, then the environment
    pub fn load_config(&self) -> Result<AppConfig> {
        let defaults = toml::to_string(&AppConfig::default())?;
        let builder = Config::builder()
            .add_source(File::from_str(&defaults, FileFormat::Toml))
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;
        debug!(path = %self.config_path.display(), "Configuration loaded");

        self.validate_config(&app_config)?;
        Ok(app_config)
    }

    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        self.validate_config(config)?;
        let toml = toml::to_string_pretty(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        debug!(path = %self.config_path.display(), "Configuration saved");
        Ok(())
    }

    pub fn validate_config(&self, config: &AppConfig) -> Result<()> {
        let url = Url::parse(&config.api.base_url).map_err(|e| {
            ConfigError::Validation(format!("Invalid base URL '{}': {}", config.api.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if config.api.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Request timeout must be greater than 0".to_string(),
            ));
        }
        if config.api.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Connect timeout must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
