//! Library Configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::widget::SelectionMode;

// ============================================================================
// CONFIGURATION (config.toml)
// ============================================================================

/// Configuration loaded from config.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log sink settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults applied to newly created listboxes
    #[serde(default)]
    pub listbox: ListboxConfig,
}

/// Logging configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether the log file is opened at all
    #[serde(default)]
    pub enabled: bool,

    /// Log file location
    #[serde(default = "default_log_path")]
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: default_log_path(),
        }
    }
}

fn default_log_path() -> PathBuf {
    PathBuf::from("xul-model.log")
}

/// Listbox defaults
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListboxConfig {
    /// Initial selection mode ("single" or "multiple")
    #[serde(default)]
    pub seltype: SelectionMode,

    /// Number of rows displayed before scrolling
    #[serde(default = "default_rows")]
    pub rows: usize,
}

impl Default for ListboxConfig {
    fn default() -> Self {
        Self {
            seltype: SelectionMode::default(),
            rows: default_rows(),
        }
    }
}

fn default_rows() -> usize {
    5
}

impl Config {
    /// Find config.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: <config dir>/xul-model, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("xul-model").join("config.toml")),
            Some(PathBuf::from("xul-model.toml")),
        ];

        candidates
            .into_iter()
            .flatten()
            .find(|candidate| candidate.exists())
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            return Self::default();
        };

        Self::load_from_path(&path).unwrap_or_else(|e| {
            crate::log!("Config: failed to load {:?}: {}", path, e);
            Self::default()
        })
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render this configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    SerializeError(#[from] toml::ser::Error),
}
