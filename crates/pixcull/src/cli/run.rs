//! The scan → delete → relocate run.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use pixcull_core::{Config, RunOptions, Workflow, WorkflowSummary};

use super::progress;
use super::prompt::TerminalPrompter;

/// Arguments controlling a run.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Delete low-resolution images without asking for confirmation
    #[arg(short = 'y', long)]
    pub auto_delete: bool,

    /// Directory to scan (searched recursively)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,
}

/// Execute a full run against the terminal.
///
/// Blocking: the caller runs this off the async runtime so Ctrl+C can be
/// observed while a prompt or file operation is in progress.
pub fn execute(args: RunArgs, config: &Config) -> anyhow::Result<()> {
    let options = RunOptions {
        root: args.directory,
        auto_delete: args.auto_delete,
        base: std::env::current_dir()?,
    };

    tracing::debug!(
        "Run options: root={:?}, auto_delete={}",
        options.root,
        options.auto_delete
    );

    let mut prompter = TerminalPrompter::new();
    // Not locked for the whole run: the interrupt handler prints too.
    let mut out = io::stdout();

    let bar = progress::create_scan_bar();
    let summary = Workflow::new(config).run(&options, &mut prompter, &mut out, |p| {
        progress::update(&bar, p)
    });
    bar.finish_and_clear();

    let summary = summary?;
    out.flush()?;
    log_summary(&summary);
    Ok(())
}

fn log_summary(summary: &WorkflowSummary) {
    match summary {
        WorkflowSummary::NothingFound => tracing::debug!("Nothing below threshold"),
        WorkflowSummary::DeletionDeclined => tracing::info!("Deletion declined, no changes made"),
        WorkflowSummary::NothingDeleted { failed } => {
            tracing::warn!("No image deleted ({failed} failure(s))")
        }
        WorkflowSummary::NothingRemaining { deleted } => {
            tracing::debug!("Deleted {deleted}, nothing left to move")
        }
        WorkflowSummary::MoveDeclined { deleted } => {
            tracing::debug!("Deleted {deleted}, move declined")
        }
        WorkflowSummary::Relocated { deleted, outcome } => tracing::debug!(
            "Deleted {deleted}, moved {} ({} overwritten, {} skipped, {} failed)",
            outcome.moved,
            outcome.overwritten,
            outcome.skipped,
            outcome.failed
        ),
    }
}
