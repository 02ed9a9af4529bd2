//! Core data types shared by the scan, report, delete and relocate stages.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::FileError;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Pixel count, widened so 8K-class sizes can't overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One image found by the scanner.
///
/// Built once during the scan and only ever borrowed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Path as produced by the directory walk (joined onto the scan root)
    pub path: PathBuf,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// File size in bytes
    pub byte_size: u64,
}

impl ImageRecord {
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }

    /// Just the filename portion, lossily converted.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Count of images per distinct resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolutionHistogram {
    counts: HashMap<Resolution, usize>,
}

impl ResolutionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, resolution: Resolution) {
        *self.counts.entry(resolution).or_insert(0) += 1;
    }

    pub fn count(&self, resolution: Resolution) -> usize {
        self.counts.get(&resolution).copied().unwrap_or(0)
    }

    /// Number of distinct resolutions.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Buckets by descending count. Ties put the larger area first, then the
    /// wider image, so the order is stable across runs.
    pub fn ranked(&self) -> Vec<(Resolution, usize)> {
        let mut buckets: Vec<(Resolution, usize)> =
            self.counts.iter().map(|(res, count)| (*res, *count)).collect();
        buckets.sort_by(|(a_res, a_count), (b_res, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| b_res.area().cmp(&a_res.area()))
                .then_with(|| b_res.width.cmp(&a_res.width))
        });
        buckets
    }

    /// The `n` most common resolutions.
    pub fn top(&self, n: usize) -> Vec<(Resolution, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// Everything a scan produced.
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Directory the scan started from
    pub root: PathBuf,

    /// Every readable image, in discovery order
    pub all: Vec<ImageRecord>,

    /// Indices into `all` of the below-threshold images
    pub(crate) low_res: Vec<usize>,

    /// Images per resolution
    pub histogram: ResolutionHistogram,

    /// Files with a matching extension, readable or not
    pub discovered: usize,

    /// Files skipped because their dimensions could not be read
    pub unreadable: usize,
}

impl ScanResult {
    /// Below-threshold images, in discovery order.
    pub fn low_res(&self) -> Vec<&ImageRecord> {
        self.low_res.iter().map(|&i| &self.all[i]).collect()
    }

    pub fn low_res_count(&self) -> usize {
        self.low_res.len()
    }

    pub fn high_res_count(&self) -> usize {
        self.all.len() - self.low_res.len()
    }

    /// Combined size of the below-threshold images.
    pub fn low_res_bytes(&self) -> u64 {
        self.low_res.iter().map(|&i| self.all[i].byte_size).sum()
    }

    /// Images still on disk after `deleted` were removed.
    pub fn remaining_after<'a>(&'a self, deleted: &[&ImageRecord]) -> Vec<&'a ImageRecord> {
        let gone: std::collections::HashSet<&Path> =
            deleted.iter().map(|r| r.path.as_path()).collect();
        self.all
            .iter()
            .filter(|r| !gone.contains(r.path.as_path()))
            .collect()
    }
}

/// Result of a deletion batch.
#[derive(Debug, Default)]
pub struct DeletionOutcome<'a> {
    /// Records whose unlink reported success
    pub deleted: Vec<&'a ImageRecord>,

    /// Unlinks that failed, in order
    pub failures: Vec<FileError>,

    /// Sum of `byte_size` over `deleted`
    pub bytes_freed: u64,
}

impl DeletionOutcome<'_> {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Result of a relocation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelocationOutcome {
    /// Files moved, including overwrites
    pub moved: usize,

    /// Moves that replaced an existing file
    pub overwritten: usize,

    /// Duplicates and declined conflicts
    pub skipped: usize,

    /// Moves that errored
    pub failed: usize,

    /// Source directories removed because they ended up empty
    pub cleaned_dirs: Vec<PathBuf>,

    /// Where files were moved to
    pub destination: PathBuf,
}

/// Bytes to mebibytes, for display.
pub fn to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, width: u32, height: u32, byte_size: u64) -> ImageRecord {
        ImageRecord {
            path: PathBuf::from(path),
            width,
            height,
            byte_size,
        }
    }

    #[test]
    fn test_resolution_display_and_area() {
        let res = Resolution::new(1920, 1080);
        assert_eq!(res.to_string(), "1920x1080");
        assert_eq!(res.area(), 2_073_600);
        assert_eq!(Resolution::new(u32::MAX, 2).area(), u64::from(u32::MAX) * 2);
    }

    #[test]
    fn test_histogram_counts() {
        let mut hist = ResolutionHistogram::new();
        hist.record(Resolution::new(1920, 1080));
        hist.record(Resolution::new(1920, 1080));
        hist.record(Resolution::new(3840, 2160));

        assert_eq!(hist.len(), 2);
        assert_eq!(hist.count(Resolution::new(1920, 1080)), 2);
        assert_eq!(hist.count(Resolution::new(3840, 2160)), 1);
        assert_eq!(hist.count(Resolution::new(1, 1)), 0);
    }

    #[test]
    fn test_histogram_ranking_breaks_ties_by_area() {
        let mut hist = ResolutionHistogram::new();
        hist.record(Resolution::new(800, 600));
        hist.record(Resolution::new(4000, 3000));
        hist.record(Resolution::new(1024, 768));
        hist.record(Resolution::new(1024, 768));

        let ranked = hist.ranked();
        assert_eq!(ranked[0], (Resolution::new(1024, 768), 2));
        assert_eq!(ranked[1], (Resolution::new(4000, 3000), 1));
        assert_eq!(ranked[2], (Resolution::new(800, 600), 1));
        assert_eq!(hist.top(1).len(), 1);
    }

    #[test]
    fn test_remaining_after_excludes_deleted_paths() {
        let scan = ScanResult {
            root: PathBuf::from("/r"),
            all: vec![
                record("/r/a.jpg", 100, 100, 10),
                record("/r/b.jpg", 4000, 3000, 20),
                record("/r/c.jpg", 200, 200, 30),
            ],
            low_res: vec![0, 2],
            histogram: ResolutionHistogram::new(),
            discovered: 3,
            unreadable: 0,
        };

        let low = scan.low_res();
        assert_eq!(scan.low_res_bytes(), 40);
        assert_eq!(scan.high_res_count(), 1);

        let remaining = scan.remaining_after(&low[..1]);
        let names: Vec<String> = remaining.iter().map(|r| r.file_name()).collect();
        assert_eq!(names, vec!["b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_to_mb() {
        assert!((to_mb(1024 * 1024) - 1.0).abs() < f64::EPSILON);
        assert!((to_mb(0)).abs() < f64::EPSILON);
    }
}
