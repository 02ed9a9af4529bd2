//! Configuration management for pixcull.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. Resolution thresholds and the extension set are deliberately not
//! part of it; see [`crate::criteria::Criteria`].

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for pixcull.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory walk settings
    pub scan: ScanConfig,

    /// Terminal report settings
    pub report: ReportConfig,

    /// Relocation settings
    pub relocate: RelocateConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let content = std::fs::read_to_string(expanded)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/pixcull/config.toml
    /// - Linux: ~/.config/pixcull/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\pixcull\config\config.toml
    ///
    /// Falls back to ~/.pixcull/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "pixcull")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| {
                PathBuf::from(shellexpand::tilde("~/.pixcull/config.toml").into_owned())
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
