//! keyring2pass command-line interface.

pub mod commands;
pub mod importer;
pub mod prompt;

use clap::{Parser, Subcommand};

pub use importer::{ImportDecision, ImportOptions, ImportSummary, Importer};
pub use prompt::{Prompter, StdinPrompter};

/// Returned when the user ends input while being prompted.
///
/// `main` turns it into the same message and exit status as Ctrl-C.
#[derive(Debug, thiserror::Error)]
#[error("cancelled by user")]
pub struct Cancelled;

/// Exit status after the user cancels the run.
pub const CANCELLED_EXIT_CODE: i32 = 1;

/// Exit status to use when `result` ended in a cancellation.
///
/// Other errors are left to `main`'s normal error reporting.
pub fn cancellation_exit_code(result: &anyhow::Result<()>) -> Option<i32> {
    match result {
        Err(e) if e.is::<Cancelled>() => Some(CANCELLED_EXIT_CODE),
        _ => None,
    }
}

/// keyring2pass - import passwords from the desktop keyring into pass
#[derive(Parser)]
#[command(name = "keyring2pass")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true, env = "KEYRING2PASS_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Import the keyring into the password store, one entry at a time
    Import(commands::import::ImportArgs),

    /// List all labels stored in the keyring
    List(commands::list::ListArgs),
}

/// Run the CLI with the given arguments.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Import(args) => commands::import::run(args, config).await,
        Commands::List(args) => commands::list::run(args, config).await,
    }
}
