//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables. Command-line flags are applied last by the CLI.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_CAD_FILE, DEFAULT_LOG_LEVEL, DEFAULT_NEO_FILE,
    DEFAULT_QUERY_LIMIT, env_vars,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Input data locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// NEO CSV file
    pub neofile: PathBuf,

    /// Close approach JSON file
    pub cadfile: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            neofile: PathBuf::from(DEFAULT_NEO_FILE),
            cadfile: PathBuf::from(DEFAULT_CAD_FILE),
        }
    }
}

/// Query output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Approaches printed when no outfile and no --limit are given (0 = all)
    pub default_limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_QUERY_LIMIT,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Complete configuration for the NEO processor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub query: QueryConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location (`<config dir>/neo-processor/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            Error::configuration("Could not determine user config directory".to_string())
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        Self::from_toml_str(&content).map_err(|e| {
            Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::configuration(e.to_string()))
    }

    /// Defaults, then the config file if given, then the environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from environment-style key lookups
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_vars::NEOFILE) {
            self.data.neofile = PathBuf::from(path);
        }
        if let Some(path) = lookup(env_vars::CADFILE) {
            self.data.cadfile = PathBuf::from(path);
        }
        if let Some(limit) = lookup(env_vars::LIMIT) {
            self.query.default_limit = limit.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a non-negative integer, got '{}'",
                    env_vars::LIMIT,
                    limit
                ))
            })?;
        }
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.data.neofile.as_os_str().is_empty() {
            return Err(Error::configuration("NEO file path cannot be empty"));
        }
        if self.data.cadfile.as_os_str().is_empty() {
            return Err(Error::configuration(
                "Close approach file path cannot be empty",
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(Error::configuration("Log level cannot be empty"));
        }
        Ok(())
    }
}
