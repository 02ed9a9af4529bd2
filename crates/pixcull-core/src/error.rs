//! Error types for the pixcull pipeline.
//!
//! Per-file failures (`FileError`) are logged and counted by the stage that
//! hit them and never abort a batch. Only `CullError` travels up to the
//! binary, where it ends the run with exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for pixcull operations.
#[derive(Error, Debug)]
pub enum CullError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Interactive input failed or was interrupted
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// The scan root is missing or not a directory
    #[error("Not a directory: {0}")]
    InvalidRoot(PathBuf),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CullError {
    /// True when the run ended because the user hit Ctrl+C at a prompt.
    pub fn is_interrupt(&self) -> bool {
        matches!(self, CullError::Prompt(PromptError::Interrupted))
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Failures tied to a single file.
#[derive(Error, Debug)]
pub enum FileError {
    /// Image header could not be read
    #[error("Cannot read dimensions of {path}: {message}")]
    Probe { path: PathBuf, message: String },

    /// Format has no dimension reader (e.g. SVG)
    #[error("Unsupported format for {path}: {format}")]
    UnsupportedFormat { path: PathBuf, format: String },

    /// File metadata (size) could not be read
    #[error("Cannot stat {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Unlink failed
    #[error("Failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rename (or copy fallback) failed
    #[error("Failed to move {from} to {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading an answer from the user.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Ctrl+C while the prompt owned the terminal
    #[error("interrupted")]
    Interrupted,

    /// Input stream ended before an answer was given
    #[error("input closed before an answer was given")]
    Closed,

    /// Terminal I/O failure
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for pixcull results.
pub type Result<T> = std::result::Result<T, CullError>;
