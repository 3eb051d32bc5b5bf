use crate::error::{Result, StorefrontError};
use serde::Deserialize;
use std::fs;

/// Environment variable overriding the configured API base URL
pub const API_URL_VAR: &str = "STOREFRONT_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:10000";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            },
        }
    }
}

impl Config {
    /// Loads config.toml if present, falling back to defaults, then applies
    /// the environment override for the base URL. Trailing slashes are
    /// stripped so URL building can always append absolute paths.
    pub fn load() -> Result<Self> {
        let mut config = match fs::read_to_string("config.toml") {
            Ok(content) => toml::from_str::<Config>(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(StorefrontError::Config(format!(
                    "Failed to read config file 'config.toml': {}",
                    e
                )))
            }
        };

        if let Ok(url) = std::env::var(API_URL_VAR) {
            if !url.trim().is_empty() {
                config.api.base_url = url;
            }
        }
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            },
        }
    }
}
