use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
///
/// Every variable has a default: the aggregator is meant to come up with
/// zero required configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// Hostname apps are assumed to be reachable at when building the
    /// `servers` entry of a synthesized document.
    pub app_host: String,
    pub doc_title: String,
    pub doc_version: String,
    pub log_level: Level,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:6174".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let app_host = std::env::var("APP_HOST").unwrap_or_else(|_| "localhost".to_string());

        let doc_title =
            std::env::var("DOC_TITLE").unwrap_or_else(|_| "API Documentation".to_string());
        let doc_version = std::env::var("DOC_VERSION").unwrap_or_else(|_| "1.0.0".to_string());

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        Ok(Self {
            bind_address,
            app_host,
            doc_title,
            doc_version,
            log_level,
        })
    }
}
