use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            message: message.into(),
        }
    }
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/coolfetch/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("coolfetch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Timeouts are non-zero
    /// - Fault probability lies within [0, 1]
    /// - At least one resource, no kind listed twice
    /// - Every URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        let defaults = &self.defaults;
        if defaults.timeout_seconds == 0 || defaults.connect_timeout_seconds == 0 {
            return Err(ConfigError::invalid("Timeouts must be greater than zero"));
        }

        if !(0.0..=1.0).contains(&defaults.fault_probability) {
            return Err(ConfigError::invalid(format!(
                "fault_probability must be between 0 and 1, got {}",
                defaults.fault_probability
            )));
        }

        if self.resources.is_empty() {
            return Err(ConfigError::invalid(
                "At least one resource must be configured",
            ));
        }

        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(resource.kind) {
                return Err(ConfigError::invalid(format!(
                    "Resource '{}' is configured more than once",
                    resource.kind
                )));
            }

            let url = resource.endpoint();
            match Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => {
                    return Err(ConfigError::invalid(format!(
                        "Resource '{}' uses unsupported scheme '{}'",
                        resource.kind,
                        parsed.scheme()
                    )));
                }
                Err(err) => {
                    return Err(ConfigError::invalid(format!(
                        "Resource '{}' has invalid url '{}': {}",
                        resource.kind, url, err
                    )));
                }
            }
        }

        Ok(())
    }
}
