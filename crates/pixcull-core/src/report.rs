//! Terminal report formatting.
//!
//! Every function here is pure: it takes results and returns text. Callers
//! decide where the text goes.

use std::path::Path;

use crate::config::ReportConfig;
use crate::types::{to_mb, DeletionOutcome, ImageRecord, RelocationOutcome, ScanResult};

const WIDTH: usize = 60;

/// Heavy rule used around section titles.
pub fn banner(title: &str) -> String {
    let rule = "=".repeat(WIDTH);
    format!("{rule}\n{title}\n{rule}")
}

fn section(title: &str) -> String {
    let rule = "─".repeat(WIDTH);
    format!("\n{rule}\n{title}\n{rule}")
}

/// `path` relative to `base` when it lives underneath it, otherwise as-is.
pub fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Below-threshold records ordered by ascending pixel area. Equal areas keep
/// scan order.
pub fn sorted_by_area<'a>(records: &[&'a ImageRecord]) -> Vec<&'a ImageRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.resolution().area());
    sorted
}

/// Counts, the low-resolution listing and the resolution histogram.
pub fn render_scan(scan: &ScanResult, config: &ReportConfig, base: &Path) -> String {
    let mut lines = vec![banner("SCAN RESULTS"), String::new()];

    lines.push(format!("Total images found: {}", scan.all.len()));
    lines.push(format!(
        "Images below 4K resolution: {}",
        scan.low_res_count()
    ));
    lines.push(format!(
        "Images at or above 4K resolution: {}",
        scan.high_res_count()
    ));
    if scan.unreadable > 0 {
        lines.push(format!("Unreadable files skipped: {}", scan.unreadable));
    }

    let low_res = scan.low_res();
    if !low_res.is_empty() {
        lines.push(section("LOW RESOLUTION IMAGES (Below 4K)"));
        lines.extend(render_low_res_listing(&low_res, config.max_listed, base));
    }

    lines.push(section(&format!(
        "RESOLUTION STATISTICS (Top {})",
        config.top_resolutions
    )));
    for (resolution, count) in scan.histogram.top(config.top_resolutions) {
        lines.push(format!(
            "  {:<12}: {:>4} image(s)",
            resolution.to_string(),
            count
        ));
    }
    if scan.histogram.len() > config.top_resolutions {
        lines.push(format!(
            "  ... and {} more unique resolutions",
            scan.histogram.len() - config.top_resolutions
        ));
    }

    lines.join("\n")
}

fn render_low_res_listing(low_res: &[&ImageRecord], max_listed: usize, base: &Path) -> Vec<String> {
    let sorted = sorted_by_area(low_res);
    let mut lines: Vec<String> = sorted
        .iter()
        .take(max_listed)
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{:>4}. {:<12} ({:>6.2} MB) - {}",
                i + 1,
                record.resolution().to_string(),
                to_mb(record.byte_size),
                display_path(&record.path, base)
            )
        })
        .collect();

    if sorted.len() > max_listed {
        lines.push(format!(
            "\n  ... and {} more low-resolution images",
            sorted.len() - max_listed
        ));
    }
    lines
}

/// Total size of the below-threshold images, framed.
pub fn render_low_res_total(scan: &ScanResult) -> String {
    let rule = "=".repeat(WIDTH);
    format!(
        "\n{rule}\nTotal size of low-resolution images: {:.2} MB\n{rule}",
        to_mb(scan.low_res_bytes())
    )
}

/// Summary after a deletion batch.
pub fn render_deletion(outcome: &DeletionOutcome<'_>) -> String {
    let mut lines = vec![
        format!("\n{}", "─".repeat(WIDTH)),
        "Deletion complete:".to_string(),
        format!("  - Successfully deleted: {} images", outcome.deleted.len()),
    ];
    if outcome.failed() > 0 {
        lines.push(format!("  - Failed to delete: {} images", outcome.failed()));
    }
    lines.push(format!(
        "  - Space freed: {:.2} MB",
        to_mb(outcome.bytes_freed)
    ));
    lines.join("\n")
}

/// Summary after a relocation run.
pub fn render_relocation(outcome: &RelocationOutcome) -> String {
    let mut lines = vec![
        format!("\n{}", "─".repeat(WIDTH)),
        "Move operation complete:".to_string(),
        format!("  - Successfully moved: {} images", outcome.moved),
    ];
    if outcome.overwritten > 0 {
        lines.push(format!("  - Overwritten: {} images", outcome.overwritten));
    }
    if outcome.skipped > 0 {
        lines.push(format!("  - Skipped (duplicates): {} images", outcome.skipped));
    }
    if outcome.failed > 0 {
        lines.push(format!("  - Failed to move: {} images", outcome.failed));
    }
    if !outcome.cleaned_dirs.is_empty() {
        lines.push(format!(
            "  - Cleaned up {} empty directories",
            outcome.cleaned_dirs.len()
        ));
    }
    lines.push(format!("  - Destination: {}", outcome.destination.display()));
    lines.join("\n")
}
