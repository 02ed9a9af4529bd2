//! Scan pipeline components.
//!
//! - **discovery**: Find image files in directories
//! - **probe**: Read pixel dimensions from image headers
//! - **scanner**: Classify every discovered image against the criteria

pub mod discovery;
pub mod probe;
pub mod scanner;

// Re-exports for convenient access
pub use discovery::{DiscoveredFile, FileDiscovery};
pub use scanner::{ScanProgress, Scanner};
