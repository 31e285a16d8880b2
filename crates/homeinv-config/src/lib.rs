//! Home inventory configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `HOMEINV_*` environment variables (`__` separates nested keys, e.g.
//! `HOMEINV_API__BASE_URL`).

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{ApiConfig, AppConfig, LoggingConfig};
