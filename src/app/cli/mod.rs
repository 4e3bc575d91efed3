//! CLI Adapter.

mod check;
mod resolve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "dmno-action")]
#[command(version)]
#[command(
    about = "Resolve dmno configuration and publish it to GitHub Actions",
    long_about = None
)]
struct Cli {
    /// Repository root (defaults to $GITHUB_WORKSPACE, then the current directory)
    #[arg(short, long, global = true)]
    workspace: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Default)]
enum Commands {
    /// Check preconditions, run `dmno resolve` and publish the result (default)
    #[default]
    #[clap(visible_alias = "r")]
    Resolve,
    /// Run the precondition checks only
    #[clap(visible_alias = "c")]
    Check,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_tracing(logging::runner_debug());

    let result: Result<i32, AppError> = workspace_root(cli.workspace).and_then(|workspace| {
        match cli.command.unwrap_or_default() {
            Commands::Resolve => resolve::run_resolve(workspace),
            Commands::Check => check::run_check(workspace),
        }
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// The only place the ambient workspace variable is consulted.
fn workspace_root(flag: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(path) = flag {
        return Ok(path);
    }
    match std::env::var_os("GITHUB_WORKSPACE").filter(|value| !value.is_empty()) {
        Some(path) => Ok(PathBuf::from(path)),
        None => Ok(std::env::current_dir()?),
    }
}
