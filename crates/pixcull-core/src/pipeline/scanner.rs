//! Directory scan: discovery, dimension probe and classification.

use std::path::Path;

use crate::config::ScanConfig;
use crate::criteria::Criteria;
use crate::error::{CullError, Result};
use crate::types::{ImageRecord, ResolutionHistogram, ScanResult};

use super::discovery::FileDiscovery;
use super::probe;

/// Progress snapshot handed to the scan observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    /// Files probed so far
    pub processed: usize,
    /// Files discovered in total
    pub total: usize,
}

/// Walks a directory and classifies every image in it.
pub struct Scanner {
    criteria: Criteria,
    config: ScanConfig,
}

impl Scanner {
    pub fn new(criteria: Criteria, config: ScanConfig) -> Self {
        Self { criteria, config }
    }

    /// Scan `root` without progress reporting.
    pub fn scan(&self, root: &Path) -> Result<ScanResult> {
        self.scan_with_progress(root, |_| {})
    }

    /// Scan `root`, calling `on_progress` every `progress_interval` files and
    /// once more when the last file is done.
    ///
    /// Files whose dimensions can't be read are logged and left out of every
    /// result set.
    pub fn scan_with_progress<F>(&self, root: &Path, mut on_progress: F) -> Result<ScanResult>
    where
        F: FnMut(ScanProgress),
    {
        if !root.is_dir() {
            return Err(CullError::InvalidRoot(root.to_path_buf()));
        }

        let files = FileDiscovery::new(self.criteria, &self.config).discover(root);
        let total = files.len();
        tracing::debug!(
            "Discovered {} candidate image(s) under {:?} ({} bytes)",
            total,
            root,
            FileDiscovery::total_size(&files)
        );

        let mut all = Vec::with_capacity(total);
        let mut low_res = Vec::new();
        let mut histogram = ResolutionHistogram::new();
        let mut unreadable = 0;

        for (i, file) in files.into_iter().enumerate() {
            let processed = i + 1;
            if processed % self.config.progress_interval == 0 {
                on_progress(ScanProgress { processed, total });
            }

            let resolution = match probe::dimensions(&file.path) {
                Ok(resolution) => resolution,
                Err(e) => {
                    unreadable += 1;
                    tracing::warn!("{e}");
                    continue;
                }
            };

            histogram.record(resolution);
            if self.criteria.is_low_res(resolution) {
                low_res.push(all.len());
            }
            all.push(ImageRecord {
                path: file.path,
                width: resolution.width,
                height: resolution.height,
                byte_size: file.size,
            });
        }

        on_progress(ScanProgress {
            processed: total,
            total,
        });

        tracing::debug!(
            "Scan complete: {} readable, {} below threshold, {} unreadable",
            all.len(),
            low_res.len(),
            unreadable
        );

        Ok(ScanResult {
            root: root.to_path_buf(),
            all,
            low_res,
            histogram,
            discovered: total,
            unreadable,
        })
    }
}
