//! Configuration handling for Orbit Map
//!
//! Configuration is read from the path given with `--config`, otherwise from
//! `config.toml` in the user config directory (e.g.
//! `~/.config/orbit-map/config.toml`). Missing files fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Body;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Default output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatSetting {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Default output format (text or json)
    pub default_format: FormatSetting,

    /// Body whose parent a transfer starts from
    pub from: String,

    /// Body whose parent a transfer ends at
    pub to: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: FormatSetting::Text,
            from: "YOU".to_string(),
            to: "SAN".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from `explicit`, or from the default location
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "orbit-map", "orbit-map")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads and validates configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("from", &self.from), ("to", &self.to)] {
            if !Body::is_valid_name(value) {
                return Err(ConfigError::Invalid(format!(
                    "'{}' is not a valid body name: '{}'",
                    key, value
                )));
            }
        }

        Ok(())
    }
}
