//! The end-to-end run: scan, report, confirm, delete, confirm, relocate.
//!
//! ```text
//! SCAN → REPORT ─(no low-res)→ DONE
//!          └→ CONFIRM_DELETE ─(declined)→ DONE
//!               └→ DELETE ─(nothing deleted / nothing left)→ DONE
//!                    └→ CONFIRM_MOVE ─(declined)→ DONE
//!                         └→ CHOOSE_DESTINATION → RELOCATE → DONE
//! ```
//!
//! All text goes to the `out` writer handed in by the caller; all answers
//! come from the [`Prompter`].

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::actions::{delete_images, Relocator};
use crate::config::Config;
use crate::criteria::Criteria;
use crate::error::Result;
use crate::pipeline::{ScanProgress, Scanner};
use crate::prompt::{parse_yes, DeleteAnswer, Prompter};
use crate::report;
use crate::types::{ImageRecord, RelocationOutcome};

/// Per-invocation options.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory to scan
    pub root: PathBuf,

    /// Skip the delete confirmation
    pub auto_delete: bool,

    /// Directory relative paths are resolved against and displayed from
    /// (normally the working directory)
    pub base: PathBuf,
}

/// How a run ended. Every variant is a normal completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowSummary {
    /// No image fell below the threshold
    NothingFound,
    /// The user declined the deletion
    DeletionDeclined,
    /// Every deletion failed
    NothingDeleted { failed: usize },
    /// Deleted everything there was; nothing left to move
    NothingRemaining { deleted: usize },
    /// Deleted, then declined the move (or gave no destination)
    MoveDeclined { deleted: usize },
    /// Deleted and relocated
    Relocated {
        deleted: usize,
        outcome: RelocationOutcome,
    },
}

/// Drives one run of the pipeline.
pub struct Workflow<'a> {
    config: &'a Config,
    criteria: Criteria,
}

impl<'a> Workflow<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            criteria: Criteria::STANDARD,
        }
    }

    /// Run every stage in order, stopping at the first declined gate.
    pub fn run<F>(
        &self,
        options: &RunOptions,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
        on_progress: F,
    ) -> Result<WorkflowSummary>
    where
        F: FnMut(ScanProgress),
    {
        let root = resolve(&options.root, &options.base);
        writeln!(out, "Scanning for images in: {}", root.display())?;
        out.flush()?;

        let scanner = Scanner::new(self.criteria, self.config.scan.clone());
        let scan = scanner.scan_with_progress(&root, on_progress)?;
        tracing::info!(
            "Scanned {} image(s), {} below {}",
            scan.all.len(),
            scan.low_res_count(),
            self.criteria.threshold()
        );

        writeln!(out)?;
        writeln!(
            out,
            "{}",
            report::render_scan(&scan, &self.config.report, &options.base)
        )?;

        let low_res = scan.low_res();
        if low_res.is_empty() {
            writeln!(out, "\n✓ No images below 4K resolution found!")?;
            return Ok(WorkflowSummary::NothingFound);
        }

        writeln!(out, "{}", report::render_low_res_total(&scan))?;

        if !options.auto_delete && !confirm_delete(prompter, out)? {
            return Ok(WorkflowSummary::DeletionDeclined);
        }

        writeln!(out, "\nDeleting {} images...", low_res.len())?;
        let deletion = delete_images(&low_res);
        for record in &deletion.deleted {
            writeln!(
                out,
                "  ✓ Deleted: {}",
                report::display_path(&record.path, &options.base)
            )?;
        }
        for failure in &deletion.failures {
            writeln!(out, "  ✗ {failure}")?;
        }
        writeln!(out, "{}", report::render_deletion(&deletion))?;

        let deleted = deletion.deleted.len();
        if deleted == 0 {
            return Ok(WorkflowSummary::NothingDeleted {
                failed: deletion.failed(),
            });
        }

        let remaining = scan.remaining_after(&deletion.deleted);
        if remaining.is_empty() {
            return Ok(WorkflowSummary::NothingRemaining { deleted });
        }

        let Some(destination) = self.confirm_move(&remaining, options, prompter, out)? else {
            writeln!(out, "Move operation cancelled.")?;
            return Ok(WorkflowSummary::MoveDeclined { deleted });
        };

        let outcome = Relocator::new(self.config.relocate.clone()).relocate(
            &remaining,
            &destination,
            &root,
            prompter,
            out,
        )?;
        writeln!(out, "{}", report::render_relocation(&outcome))?;

        Ok(WorkflowSummary::Relocated { deleted, outcome })
    }

    /// Offer the move and, if accepted, settle on a destination directory.
    fn confirm_move(
        &self,
        remaining: &[&ImageRecord],
        options: &RunOptions,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> Result<Option<PathBuf>> {
        writeln!(out, "\n{}", report::banner("MOVE HIGH-RESOLUTION IMAGES"))?;
        writeln!(
            out,
            "\nYou have {} high-resolution images remaining.",
            remaining.len()
        )?;
        writeln!(out, "Would you like to move them to a different directory?")?;
        out.flush()?;

        let answer = prompter.ask("Move high-resolution images? [y/N]")?;
        if !parse_yes(&answer) {
            return Ok(None);
        }

        choose_destination(&options.base, prompter, out)
    }
}

/// Ask until the answer is recognised. `true` means delete.
fn confirm_delete(prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<bool> {
    writeln!(out, "\nWould you like to delete these low-resolution images?")?;
    writeln!(out, "WARNING: This action cannot be undone!")?;
    out.flush()?;

    loop {
        let answer = prompter.ask("Delete all low-resolution images? [y/N]")?;
        match DeleteAnswer::parse(&answer) {
            DeleteAnswer::Proceed => return Ok(true),
            DeleteAnswer::Cancel => {
                writeln!(out, "Deletion cancelled. No files were deleted.")?;
                return Ok(false);
            }
            DeleteAnswer::Unrecognized => {
                writeln!(out, "Please enter 'y' for yes or 'n' for no.")?;
                out.flush()?;
            }
        }
    }
}

/// Prompt for a destination until one exists (or is created) as a directory.
/// An empty answer cancels.
fn choose_destination(
    base: &Path,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> Result<Option<PathBuf>> {
    loop {
        let raw = prompter.ask("Enter destination directory path")?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        let path = resolve(Path::new(&*shellexpand::tilde(raw)), base);

        if !path.exists() {
            let create = prompter.ask(&format!(
                "Directory '{}' does not exist. Create it? [y/N]",
                path.display()
            ))?;
            if !parse_yes(&create) {
                continue;
            }
            match std::fs::create_dir_all(&path) {
                Ok(()) => {
                    writeln!(out, "✓ Created directory: {}", path.display())?;
                    return Ok(Some(path));
                }
                Err(e) => {
                    tracing::warn!("Cannot create {:?}: {e}", path);
                    writeln!(out, "✗ Failed to create directory: {e}")?;
                }
            }
        } else if !path.is_dir() {
            writeln!(out, "Error: '{}' is not a directory.", path.display())?;
        } else {
            return Ok(Some(path));
        }
    }
}

fn resolve(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
