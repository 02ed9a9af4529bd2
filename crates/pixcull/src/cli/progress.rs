//! Scan progress bar.

use indicatif::{ProgressBar, ProgressStyle};
use pixcull_core::ScanProgress;

/// Create the bar shown while image headers are probed.
///
/// The length is unknown until discovery finishes, so it starts at zero and
/// is set from the first update.
pub fn create_scan_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} Analyzing resolutions [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-"),
    );
    pb
}

/// Apply one progress snapshot; clears the bar once every file is done.
pub fn update(pb: &ProgressBar, progress: ScanProgress) {
    pb.set_length(progress.total as u64);
    pb.set_position(progress.processed as u64);
    if progress.processed >= progress.total {
        pb.finish_and_clear();
    }
}
