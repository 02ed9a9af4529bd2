//! CLI command implementations.

pub mod progress;
pub mod prompt;
pub mod run;
pub mod theme;
