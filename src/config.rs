//! Application configuration.
//!
//! Priority: environment variables > config file > defaults. The config
//! file is YAML at `~/.config/agenda-pro/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Remote table store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of the table store service.
    pub base_url: String,
    /// Bearer token sent with every request, if the service requires one.
    pub api_key: Option<String>,
    /// Bound on every remote read and write, in seconds.
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            api_key: None,
            timeout_secs: 15,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The shared access password gating the session.
    pub password: String,
    /// Remote table store settings.
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            password: String::new(),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            config = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;
        }

        // Environment variable overrides
        if let Ok(password) = std::env::var("AGENDA_PASSWORD") {
            config.password = password;
        }
        if let Ok(url) = std::env::var("AGENDA_STORE_URL") {
            config.store.base_url = url;
        }
        if let Ok(key) = std::env::var("AGENDA_API_KEY") {
            config.store.api_key = Some(key);
        }
        if let Ok(timeout) = std::env::var("AGENDA_TIMEOUT_SECS") {
            config.store.timeout_secs = timeout
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(timeout))?;
        }

        Ok(config)
    }

    /// Default config file path: ~/.config/agenda-pro/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("agenda-pro")
            .join("config.yaml")
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{0}': {1}")]
    ReadError(PathBuf, #[source] std::io::Error),
    #[error("failed to parse config file '{0}': {1}")]
    ParseError(PathBuf, #[source] serde_yaml::Error),
    #[error("AGENDA_TIMEOUT_SECS is not a number: '{0}'")]
    InvalidTimeout(String),
}
