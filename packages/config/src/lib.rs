// ABOUTME: Configuration loading for the laundry tracker
// ABOUTME: Server settings from environment variables plus the optional YAML app config

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub mod constants;

use constants::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
}

/// Application settings read from the YAML config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_ml_provider")]
    pub ml_provider: String,
}

fn default_ml_provider() -> String {
    DEFAULT_ML_PROVIDER.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ml_provider: default_ml_provider(),
        }
    }
}

impl AppConfig {
    /// Load from `path`. A missing, empty or unparsable file yields defaults.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No app config at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                warn!("Failed to read app config {}: {}", path.display(), e);
                return Self::default();
            }
        };

        if content.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse app config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub cors_origin: String,
    pub config_file: PathBuf,
    pub openai_api_key: Option<String>,
    pub app: AppConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset or blank keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get(LAUNDRY_PORT) {
            Some(port_str) => port_str.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let config_file = PathBuf::from(
            get(LAUNDRY_CONFIG_FILE).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string()),
        );
        let app = AppConfig::load(&config_file);

        Ok(Config {
            host: get(LAUNDRY_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: get(LAUNDRY_DATABASE_URL)
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            cors_origin: get(LAUNDRY_CORS_ORIGIN)
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            config_file,
            openai_api_key: get(OPENAI_API_KEY),
            app,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
