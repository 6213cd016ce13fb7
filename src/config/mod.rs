//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/placemark/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::format::LabelSet;
use crate::geo::ResultFilter;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Geocoding service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the Nominatim instance
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User-Agent header sent with each request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of suggestions per completion
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Which kinds of results to offer as suggestions (poi, address, all)
    #[serde(default = "default_result_filter")]
    pub result_filter: String,

    /// Preferred result language (Accept-Language); empty uses the provider default
    #[serde(default)]
    pub language: String,

    /// Minimum delay between requests in milliseconds
    #[serde(default = "default_min_interval")]
    pub min_interval_ms: u64,
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Detail label set (en, ja)
    #[serde(default = "default_labels")]
    pub labels: String,

    /// Output format for one-shot lookups (text, json)
    #[serde(default = "default_format")]
    pub format: String,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

// Default value functions for serde
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}
fn default_result_filter() -> String {
    DEFAULT_RESULT_FILTER.to_string()
}
fn default_min_interval() -> u64 {
    DEFAULT_MIN_INTERVAL_MS
}
fn default_labels() -> String {
    DEFAULT_LABELS.to_string()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            suggestion_limit: default_suggestion_limit(),
            result_filter: default_result_filter(),
            language: String::new(),
            min_interval_ms: default_min_interval(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            format: default_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServiceConfig {
    /// Parsed suggestion filter
    pub fn result_filter(&self) -> Result<ResultFilter> {
        ResultFilter::from_str(&self.result_filter).map_err(Error::Config)
    }

    /// Minimum delay between requests
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

impl DisplayConfig {
    /// Parsed label set
    pub fn labels(&self) -> Result<LabelSet> {
        LabelSet::from_str(&self.labels).map_err(Error::Config)
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read config file: {}", e))
            })?;

            toml::from_str(&content).map_err(|e| {
                Error::Config(format!("Failed to parse config file: {}", e))
            })
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            Error::Config(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(&path, content).map_err(|e| {
            Error::Config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["service", "base_url"] => Some(self.service.base_url.clone()),
            ["service", "user_agent"] => Some(self.service.user_agent.clone()),
            ["service", "suggestion_limit"] => Some(self.service.suggestion_limit.to_string()),
            ["service", "result_filter"] => Some(self.service.result_filter.clone()),
            ["service", "language"] => Some(self.service.language.clone()),
            ["service", "min_interval_ms"] => Some(self.service.min_interval_ms.to_string()),

            ["display", "labels"] => Some(self.display.labels.clone()),
            ["display", "format"] => Some(self.display.format.clone()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["service", "base_url"] => {
                self.service.base_url = value.trim_end_matches('/').to_string();
            }
            ["service", "user_agent"] => {
                if value.trim().is_empty() {
                    return Err(Error::Config("User agent must not be empty".to_string()));
                }
                self.service.user_agent = value.to_string();
            }
            ["service", "suggestion_limit"] => {
                let limit: usize = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid suggestion limit: {}", value))
                })?;
                if limit == 0 {
                    return Err(Error::Config("Suggestion limit must be positive".to_string()));
                }
                self.service.suggestion_limit = limit;
            }
            ["service", "result_filter"] => {
                ResultFilter::from_str(value).map_err(Error::Config)?;
                self.service.result_filter = value.to_lowercase();
            }
            ["service", "language"] => {
                self.service.language = value.to_string();
            }
            ["service", "min_interval_ms"] => {
                self.service.min_interval_ms = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid interval value: {}", value))
                })?;
            }

            ["display", "labels"] => {
                LabelSet::from_str(value).map_err(Error::Config)?;
                self.display.labels = value.to_lowercase();
            }
            ["display", "format"] => {
                if crate::format::get_formatter(value).is_none() {
                    return Err(Error::Config(format!("Unknown format: {}", value)));
                }
                self.display.format = value.to_lowercase();
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid port value: {}", value))
                })?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "service.base_url",
            "service.user_agent",
            "service.suggestion_limit",
            "service.result_filter",
            "service.language",
            "service.min_interval_ms",
            "display.labels",
            "display.format",
            "server.host",
            "server.port",
        ]
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
