//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and search behavior settings
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.search.user_agent.trim().is_empty() {
            return Err(AppError::validation("search.user_agent is empty"));
        }
        if self.search.timeout_secs == 0 {
            return Err(AppError::validation("search.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// HTTP client settings for the search gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; oppscout/0.1)".into()
    }
    pub fn timeout() -> u64 {
        10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.search.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.search.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[search]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.search.timeout_secs, 5);
        assert!(!config.search.user_agent.is_empty());
    }
}
