use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::credentials::SecureString;
use crate::config::types::Config;

pub const ENV_PROJECT_ID: &str = "FOLIO_PROJECT_ID";
pub const ENV_DATASET: &str = "FOLIO_DATASET";
pub const ENV_API_TOKEN: &str = "FOLIO_API_TOKEN";

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/folio/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("folio").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML.
    ///
    /// Validation is left to the caller so that environment and CLI
    /// overrides can be applied first.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Applies `FOLIO_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides using `lookup` as the environment.
    ///
    /// Empty values are ignored.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(project_id) = non_empty(ENV_PROJECT_ID) {
            self.content.project_id = project_id;
        }
        if let Some(dataset) = non_empty(ENV_DATASET) {
            self.content.dataset = dataset;
        }
        if let Some(token) = non_empty(ENV_API_TOKEN) {
            self.content.token = Some(SecureString::new(token));
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - A project id is set unless an explicit API host is configured
    /// - Dataset and API version are non-empty
    /// - The fallback contact endpoint is an http(s) URL
    /// - The tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let content = &self.content;

        if content.api_host.is_none() && content.project_id.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "content.project_id is required (set it in the config file or {})",
                    ENV_PROJECT_ID
                ),
            });
        }

        if content.dataset.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "content.dataset must not be empty".to_string(),
            });
        }

        if content.api_version.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "content.api_version must not be empty".to_string(),
            });
        }

        let endpoint = &self.contact.fallback_endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "contact.fallback_endpoint '{}' is not an http(s) URL",
                    endpoint
                ),
            });
        }

        if self.display.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "display.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
