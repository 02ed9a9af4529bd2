//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["pretty", "json"];

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.progress_interval == 0 {
            return Err(ConfigError::ValidationError(
                "scan.progress_interval must be > 0".into(),
            ));
        }
        if self.relocate.progress_interval == 0 {
            return Err(ConfigError::ValidationError(
                "relocate.progress_interval must be > 0".into(),
            ));
        }
        if self.report.max_listed == 0 {
            return Err(ConfigError::ValidationError(
                "report.max_listed must be > 0".into(),
            ));
        }
        if self.report.top_resolutions == 0 {
            return Err(ConfigError::ValidationError(
                "report.top_resolutions must be > 0".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be one of {}",
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }
}
