//! Moving images into a destination directory.
//!
//! Same-named files already in the destination are compared by dimensions and
//! byte size. A match is a duplicate and is skipped, leaving the source where
//! it is. Anything else is a conflict the prompter decides, with an `a`
//! answer switching to overwrite-all for the rest of the run.

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::RelocateConfig;
use crate::error::{FileError, Result};
use crate::pipeline::probe;
use crate::prompt::{OverwriteChoice, Prompter};
use crate::types::{to_mb, ImageRecord, RelocationOutcome};

/// What to do with one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Nothing by that name in the destination
    Move,
    /// Replace the file already there
    Overwrite,
    /// Duplicate, or the user declined
    Skip,
}

/// Moves records into a destination directory.
pub struct Relocator {
    config: RelocateConfig,
}

impl Relocator {
    pub fn new(config: RelocateConfig) -> Self {
        Self { config }
    }

    /// Move every record into `destination`, then remove source directories
    /// (other than `scan_root`) that ended up empty.
    ///
    /// Per-file failures are counted and logged. Only a prompt failure or a
    /// write to `out` failing ends the run early.
    pub fn relocate(
        &self,
        records: &[&ImageRecord],
        destination: &Path,
        scan_root: &Path,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> Result<RelocationOutcome> {
        let mut outcome = RelocationOutcome {
            destination: destination.to_path_buf(),
            ..RelocationOutcome::default()
        };
        let mut overwrite_all = false;
        let total = records.len();

        writeln!(out, "\nMoving {total} high-resolution images...")?;

        for (i, &record) in records.iter().enumerate() {
            let done = i + 1;
            if done % self.config.progress_interval == 0 {
                writeln!(out, "  Progress: {}/{} ({}%)", done, total, done * 100 / total)?;
            }

            let target = destination.join(record.path.file_name().unwrap_or_default());

            let placement = if target.exists() {
                if is_duplicate(record, &target) {
                    tracing::debug!("Duplicate already at {:?}, leaving source", target);
                    Placement::Skip
                } else if overwrite_all {
                    Placement::Overwrite
                } else {
                    let choice = ask_overwrite(record, &target, prompter, out)?;
                    if choice == OverwriteChoice::All {
                        overwrite_all = true;
                    }
                    if choice.overwrites() {
                        Placement::Overwrite
                    } else {
                        Placement::Skip
                    }
                }
            } else {
                Placement::Move
            };

            if placement == Placement::Skip {
                outcome.skipped += 1;
                continue;
            }

            match move_file(&record.path, &target) {
                Ok(()) => {
                    outcome.moved += 1;
                    if placement == Placement::Overwrite {
                        outcome.overwritten += 1;
                    }
                }
                Err(e) => {
                    outcome.failed += 1;
                    tracing::warn!("{e}");
                    writeln!(out, "  ✗ Failed to move {}: {}", record.file_name(), e)?;
                }
            }
        }

        writeln!(out, "\nCleaning up empty directories...")?;
        outcome.cleaned_dirs = remove_empty_parents(records, scan_root);

        Ok(outcome)
    }
}

/// Same dimensions and same byte size as the source.
fn is_duplicate(record: &ImageRecord, existing: &Path) -> bool {
    let same_size = std::fs::metadata(existing)
        .map(|m| m.len() == record.byte_size)
        .unwrap_or(false);
    same_size
        && probe::dimensions(existing)
            .map(|res| res == record.resolution())
            .unwrap_or(false)
}

fn ask_overwrite(
    record: &ImageRecord,
    existing: &Path,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<OverwriteChoice> {
    writeln!(
        out,
        "\n  Conflict: '{}' already exists in destination",
        record.file_name()
    )?;
    writeln!(
        out,
        "    Source: {} ({:.2} MB)",
        record.resolution(),
        to_mb(record.byte_size)
    )?;
    if let Ok(res) = probe::dimensions(existing) {
        let size = std::fs::metadata(existing).map(|m| m.len()).unwrap_or(0);
        writeln!(out, "    Destination: {} ({:.2} MB)", res, to_mb(size))?;
    }
    out.flush()?;

    let answer = prompter.ask("Overwrite? [y/N/a (yes to all)]")?;
    Ok(OverwriteChoice::parse(&answer))
}

/// Rename, falling back to copy and remove when crossing filesystems.
pub fn move_file(from: &Path, to: &Path) -> std::result::Result<(), FileError> {
    let result = match std::fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            std::fs::copy(from, to).and_then(|_| std::fs::remove_file(from))
        }
        other => other,
    };
    result.map_err(|source| FileError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Remove each record's parent directory if it is now empty. The scan root
/// itself is never removed, and failures are ignored.
fn remove_empty_parents(records: &[&ImageRecord], scan_root: &Path) -> Vec<PathBuf> {
    let mut seen: HashSet<&Path> = HashSet::new();
    let mut cleaned = Vec::new();

    for record in records {
        let Some(parent) = record.path.parent() else {
            continue;
        };
        if parent == scan_root || !seen.insert(parent) || !parent.is_dir() {
            continue;
        }
        let is_empty = std::fs::read_dir(parent)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if is_empty && std::fs::remove_dir(parent).is_ok() {
            tracing::debug!("Removed empty directory {:?}", parent);
            cleaned.push(parent.to_path_buf());
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use image::{GrayImage, ImageFormat};

    /// Write a real PNG and return its record.
    fn image_at(path: &Path, width: u32, height: u32) -> ImageRecord {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        GrayImage::new(width, height)
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
        ImageRecord {
            path: path.to_path_buf(),
            width,
            height,
            byte_size: std::fs::metadata(path).unwrap().len(),
        }
    }

    fn run(
        records: &[ImageRecord],
        dest: &Path,
        root: &Path,
        prompter: &mut ScriptedPrompter,
    ) -> (RelocationOutcome, String) {
        let refs: Vec<&ImageRecord> = records.iter().collect();
        let mut out = Vec::new();
        let outcome = Relocator::new(RelocateConfig::default())
            .relocate(&refs, dest, root, prompter, &mut out)
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_moves_without_conflicts() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let records = vec![
            image_at(&root.path().join("a.png"), 8, 8),
            image_at(&root.path().join("b.png"), 9, 9),
        ];

        let mut prompter = ScriptedPrompter::default();
        let (outcome, _) = run(&records, dest.path(), root.path(), &mut prompter);

        assert_eq!(outcome.moved, 2);
        assert_eq!(outcome.skipped, 0);
        assert!(dest.path().join("a.png").exists());
        assert!(dest.path().join("b.png").exists());
        assert!(!records[0].path.exists());
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_duplicate_is_skipped_and_source_kept() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let records = vec![image_at(&root.path().join("same.png"), 12, 7)];
        image_at(&dest.path().join("same.png"), 12, 7);

        let mut prompter = ScriptedPrompter::default();
        let (outcome, _) = run(&records, dest.path(), root.path(), &mut prompter);

        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.moved, 0);
        assert!(records[0].path.exists());
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_rerun_moves_nothing_for_true_duplicates() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let original = image_at(&root.path().join("x.png"), 5, 5);
        std::fs::copy(&original.path, dest.path().join("x.png")).unwrap();

        let records = vec![original];
        let mut prompter = ScriptedPrompter::default();
        let (first, _) = run(&records, dest.path(), root.path(), &mut prompter);
        let (second, _) = run(&records, dest.path(), root.path(), &mut prompter);

        assert_eq!(first.moved + second.moved, 0);
        assert_eq!(second.skipped, 1);
    }

    #[test]
    fn test_conflict_declined_skips() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let records = vec![image_at(&root.path().join("c.png"), 20, 20)];
        let existing = image_at(&dest.path().join("c.png"), 30, 30);

        let mut prompter = ScriptedPrompter::new([""]);
        let (outcome, text) = run(&records, dest.path(), root.path(), &mut prompter);

        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.moved, 0);
        assert!(records[0].path.exists());
        assert_eq!(probe::dimensions(&existing.path).unwrap().width, 30);
        assert!(text.contains("Conflict: 'c.png' already exists in destination"));
        assert!(text.contains("Source: 20x20"));
        assert!(text.contains("Destination: 30x30"));
    }

    #[test]
    fn test_conflict_yes_overwrites_one() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let records = vec![
            image_at(&root.path().join("one.png"), 20, 20),
            image_at(&root.path().join("two.png"), 21, 21),
        ];
        image_at(&dest.path().join("one.png"), 40, 40);
        image_at(&dest.path().join("two.png"), 41, 41);

        let mut prompter = ScriptedPrompter::new(["y", "n"]);
        let (outcome, _) = run(&records, dest.path(), root.path(), &mut prompter);

        assert_eq!(outcome.moved, 1);
        assert_eq!(outcome.overwritten, 1);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(
            probe::dimensions(&dest.path().join("one.png")).unwrap().width,
            20
        );
        assert!(records[1].path.exists());
    }

    #[test]
    fn test_overwrite_all_is_sticky() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let mut records = Vec::new();
        for (i, name) in ["p.png", "q.png", "r.png"].iter().enumerate() {
            records.push(image_at(&root.path().join(name), 10 + i as u32, 10));
            image_at(&dest.path().join(name), 50, 50);
        }

        let mut prompter = ScriptedPrompter::new(["a"]);
        let (outcome, _) = run(&records, dest.path(), root.path(), &mut prompter);

        assert_eq!(prompter.asked.len(), 1);
        assert_eq!(outcome.moved, 3);
        assert_eq!(outcome.overwritten, 3);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn test_missing_source_counts_as_failed_and_continues() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let ghost = ImageRecord {
            path: root.path().join("ghost.png"),
            width: 1,
            height: 1,
            byte_size: 1,
        };
        let real = image_at(&root.path().join("real.png"), 3, 3);

        let mut prompter = ScriptedPrompter::default();
        let (outcome, text) = run(&[ghost, real], dest.path(), root.path(), &mut prompter);

        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.moved, 1);
        assert!(text.contains("Failed to move ghost.png"));
    }

    #[test]
    fn test_prompt_failure_ends_run() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let records = [image_at(&root.path().join("c.png"), 20, 20)];
        image_at(&dest.path().join("c.png"), 30, 30);
        let refs: Vec<&ImageRecord> = records.iter().collect();

        let mut prompter = ScriptedPrompter::default();
        let result = Relocator::new(RelocateConfig::default()).relocate(
            &refs,
            dest.path(),
            root.path(),
            &mut prompter,
            &mut io::sink(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_emptied_subdirectories_removed_others_kept() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let emptied = root.path().join("emptied");
        let busy = root.path().join("busy");
        let records = vec![
            image_at(&emptied.join("e.png"), 4, 4),
            image_at(&busy.join("b.png"), 4, 4),
            image_at(&root.path().join("top.png"), 4, 4),
        ];
        std::fs::write(busy.join("notes.txt"), b"keep me").unwrap();

        let mut prompter = ScriptedPrompter::default();
        let (outcome, _) = run(&records, dest.path(), root.path(), &mut prompter);

        assert_eq!(outcome.moved, 3);
        assert!(!emptied.exists());
        assert!(busy.exists());
        assert!(root.path().exists());
        assert_eq!(outcome.cleaned_dirs, vec![emptied]);
    }

    #[test]
    fn test_progress_lines() {
        let root = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        let records: Vec<ImageRecord> = (0..4)
            .map(|i| image_at(&root.path().join(format!("{i}.png")), 2, 2))
            .collect();
        let refs: Vec<&ImageRecord> = records.iter().collect();

        let mut out = Vec::new();
        Relocator::new(RelocateConfig {
            progress_interval: 2,
        })
        .relocate(
            &refs,
            dest.path(),
            root.path(),
            &mut ScriptedPrompter::default(),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Progress: 2/4 (50%)"));
        assert!(text.contains("Progress: 4/4 (100%)"));
    }

    #[test]
    fn test_move_file_into_missing_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let src = image_at(&root.path().join("s.png"), 2, 2);
        let err = move_file(&src.path, &root.path().join("nope").join("s.png")).unwrap_err();
        assert!(matches!(err, FileError::Move { .. }));
        assert!(src.path.exists());
    }
}
