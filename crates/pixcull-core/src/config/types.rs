//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Directory walk settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links while walking
    pub follow_links: bool,

    /// Report progress every N files
    pub progress_interval: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            progress_interval: 100,
        }
    }
}

/// Terminal report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum low-resolution images listed individually
    pub max_listed: usize,

    /// Number of histogram buckets shown
    pub top_resolutions: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_listed: 50,
            top_resolutions: 10,
        }
    }
}

/// Relocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelocateConfig {
    /// Print a progress line every N files
    pub progress_interval: usize,
}

impl Default for RelocateConfig {
    fn default() -> Self {
        Self {
            progress_interval: 50,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level ("error", "warn", "info", "debug", "trace")
    pub level: String,

    /// Log format ("pretty" or "json")
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
