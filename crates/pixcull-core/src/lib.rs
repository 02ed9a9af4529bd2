//! pixcull core - find images below 4K, delete them, relocate the rest.
//!
//! # Architecture
//!
//! A single-threaded pipeline over the filesystem:
//!
//! ```text
//! Walk → Probe dimensions → Classify → Report → Delete → Relocate → Prune empty dirs
//! ```
//!
//! The binary crate supplies a terminal [`Prompter`] and a progress bar; the
//! [`Workflow`] does everything else.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pixcull_core::{Config, Criteria, Scanner};
//!
//! let config = Config::default();
//! let scan = Scanner::new(Criteria::STANDARD, config.scan.clone())
//!     .scan(std::path::Path::new("./photos"))?;
//! println!("{} of {} images are below 4K", scan.low_res_count(), scan.all.len());
//! # Ok::<(), pixcull_core::CullError>(())
//! ```

// Module declarations
pub mod actions;
pub mod config;
pub mod criteria;
pub mod error;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod types;
pub mod workflow;

// Re-exports for convenient access
pub use actions::{delete_images, Relocator};
pub use config::Config;
pub use criteria::Criteria;
pub use error::{ConfigError, CullError, FileError, PromptError, Result};
pub use pipeline::{FileDiscovery, ScanProgress, Scanner};
pub use prompt::{DeleteAnswer, OverwriteChoice, Prompter, ScriptedPrompter};
pub use types::{
    DeletionOutcome, ImageRecord, RelocationOutcome, Resolution, ResolutionHistogram, ScanResult,
};
pub use workflow::{RunOptions, Workflow, WorkflowSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
