//! Configuration loading for search-api-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable NB_SEARCH_URL (endpoint base URL, highest priority)
//! 2. Environment variable SEARCH_API_CONFIG_PATH
//! 3. ~/.config/search-api-mcp/config.toml
//! 4. Default values

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search endpoint configuration
    #[serde(default)]
    pub search_api: SearchApiConfig,
}

/// Search endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchApiConfig {
    /// Endpoint base URL (empty = unconfigured, every call fails at transport)
    #[serde(default)]
    pub url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// User agent sent with outbound requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions
fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    "search-api-mcp/0.1".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_api: SearchApiConfig::default(),
        }
    }
}

impl Default for SearchApiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path specified, using defaults");
            Self::default()
        };

        // Endpoint URL from environment (highest priority)
        if let Ok(url) = std::env::var("NB_SEARCH_URL") {
            config.search_api.url = url;
        }

        Ok(config)
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("SEARCH_API_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.config/search-api-mcp/config.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home)
                .join(".config")
                .join("search-api-mcp")
                .join("config.toml");
            return Some(path);
        }

        None
    }
}
