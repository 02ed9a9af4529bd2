//! pixcull - clear out images below 4K and gather the rest.
//!
//! Scans a directory tree, reports which images fall below 3840x2160,
//! deletes them after confirmation, then offers to move the survivors into
//! a single folder.
//!
//! # Usage
//!
//! ```bash
//! # Scan the current directory
//! pixcull
//!
//! # Scan a folder and delete without asking
//! pixcull -d ~/Pictures -y
//! ```

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pixcull_core::{Config, CullError};

mod cli;
mod logging;

const CANCELLED: &str = "\n\nOperation cancelled by user.";

/// pixcull - delete images below 4K resolution and relocate the rest.
#[derive(Parser, Debug)]
#[command(name = "pixcull")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    #[command(flatten)]
    run: cli::run::RunArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so config problems go straight to stderr.
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("\nError: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("pixcull v{}", pixcull_core::VERSION);

    let args = cli.run;
    let run = tokio::task::spawn_blocking(move || cli::run::execute(args, &config));

    tokio::select! {
        joined = run => match joined {
            Ok(Ok(())) => ExitCode::SUCCESS,
            Ok(Err(e)) => report_failure(&e),
            Err(e) => {
                eprintln!("\nError: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            // The blocking task can't be cancelled; dropping the runtime would
            // wait on it.
            println!("{CANCELLED}");
            std::process::exit(1);
        }
    }
}

/// An explicit `--config` must load; a broken default file only warns.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from(path)
            .map_err(|e| anyhow::anyhow!("failed to load config {}: {e}", path.display()));
    }

    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Config file: {}",
                Config::default_path().display()
            );
            Ok(Config::default())
        }
    }
}

fn is_interrupt(err: &anyhow::Error) -> bool {
    err.downcast_ref::<CullError>()
        .is_some_and(CullError::is_interrupt)
}

fn report_failure(err: &anyhow::Error) -> ExitCode {
    if is_interrupt(err) {
        println!("{CANCELLED}");
    } else {
        eprintln!("\nError: {err:#}");
    }
    ExitCode::FAILURE
}
