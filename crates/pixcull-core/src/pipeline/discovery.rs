//! File discovery for finding images in directories.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::criteria::Criteria;
use crate::error::FileError;

/// Discovers image files in directories.
pub struct FileDiscovery {
    criteria: Criteria,
    follow_links: bool,
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(criteria: Criteria, config: &ScanConfig) -> Self {
        Self {
            criteria,
            follow_links: config.follow_links,
        }
    }

    /// Recursively find every regular file under `root` with an image extension.
    ///
    /// Walk errors (unreadable directories, broken links) are logged and skipped.
    pub fn discover(&self, root: &Path) -> Vec<DiscoveredFile> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(self.follow_links) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };

            let entry_path = entry.path();
            if !entry_path.is_file() || !self.criteria.matches_extension(entry_path) {
                continue;
            }

            match std::fs::metadata(entry_path) {
                Ok(meta) => files.push(DiscoveredFile {
                    path: entry_path.to_path_buf(),
                    size: meta.len(),
                }),
                Err(e) => {
                    let err = FileError::Metadata {
                        path: entry_path.to_path_buf(),
                        message: e.to_string(),
                    };
                    tracing::warn!("{err}");
                }
            }
        }

        // Sort by path for deterministic ordering
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[DiscoveredFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}
