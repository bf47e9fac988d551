//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dashboard::PageOptions;
use crate::data::DEFAULT_DATA_PATH;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub page: PageOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Data source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string, bracketing IPv6 literals
    pub fn addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// First existing config file among the default locations
    pub fn discover() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("predator-dashboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Load the given file, or environment-only config when there is none
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Self::from_env(),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup; an unparseable value is an error
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Data overrides
        if let Some(path) = lookup("PREDATOR_DATA_PATH") {
            self.data.path = PathBuf::from(path);
        }

        // Server overrides
        if let Some(host) = lookup("PREDATOR_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PREDATOR_PORT") {
            self.server.port = port.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidEnv {
                    key: "PREDATOR_PORT",
                    value: port.clone(),
                    error: e.to_string(),
                }
            })?;
        }

        // Logging overrides
        if let Some(level) = lookup("PREDATOR_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("PREDATOR_LOG_FORMAT") {
            self.logging.format = format.parse().map_err(|e| ConfigError::InvalidEnv {
                key: "PREDATOR_LOG_FORMAT",
                value: format.clone(),
                error: e,
            })?;
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value {value:?} for {key}: {error}")]
    InvalidEnv {
        key: &'static str,
        value: String,
        error: String,
    },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Predator Dashboard Configuration
#
# Environment variables override these settings:
# - PREDATOR_DATA_PATH
# - PREDATOR_HOST
# - PREDATOR_PORT
# - PREDATOR_LOG_LEVEL
# - PREDATOR_LOG_FORMAT

[data]
# CSV with Year, Number of Active Traps, Pests Caught and Catch Rate columns
path = "static/data/Predator_control.csv"

[server]
# Dashboard host
host = "0.0.0.0"

# Dashboard port
port = 8050

[page]
# Browser tab title
title = "Predator Control"

# plotly.js bundle loaded by the page
plotly_src = "https://cdn.plot.ly/plotly-2.35.2.min.js"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
