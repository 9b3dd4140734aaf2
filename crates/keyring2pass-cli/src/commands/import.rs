//! `keyring2pass import`: move keyring entries into the password store.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use keyring2pass_core::paths::expand_tilde;
use keyring2pass_core::{Config, SuccessLog};
use keyring2pass_secrets::PassCommand;

use crate::importer::{ImportOptions, Importer};
use crate::prompt::StdinPrompter;

/// Import command arguments.
#[derive(Args)]
pub struct ImportArgs {
    /// Prefix the imported labels [default: imported/]
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Overwrite existing paths in the password store
    #[arg(long)]
    pub overwrite: bool,

    /// Log each imported label to a file
    #[arg(long, value_name = "LOG")]
    pub log: Option<PathBuf>,

    /// If a label exists in this file, skip it
    #[arg(long, value_name = "SKIPLOG")]
    pub skiplog: Option<PathBuf>,

    /// Don't ask for a path, use the prefix followed by the label
    #[arg(long)]
    pub do_not_ask: bool,

    /// Label of the keyring collection to read (default collection if omitted)
    #[arg(long, value_name = "LABEL")]
    pub collection: Option<String>,

    /// Program used to insert entries
    #[arg(long, value_name = "PATH", env = "KEYRING2PASS_PASS")]
    pub pass_bin: Option<String>,
}

/// Run the import command.
pub async fn run(args: ImportArgs, config: Config) -> anyhow::Result<()> {
    let options = ImportOptions {
        prefix: args
            .prefix
            .unwrap_or_else(|| config.prefix().to_string()),
        overwrite: args.overwrite,
        ask: !args.do_not_ask,
    };
    let pass_bin = args
        .pass_bin
        .unwrap_or_else(|| config.pass_bin().to_string());
    let sink = PassCommand::new(pass_bin).with_confirm_delay(config.confirm_delay());

    let log = args
        .log
        .or_else(|| config.log.clone())
        .map(|p| expand_tilde(&p.to_string_lossy()));
    let skiplog = args
        .skiplog
        .or_else(|| config.skiplog.clone())
        .map(|p| expand_tilde(&p.to_string_lossy()));
    let collection = args.collection.or_else(|| config.collection.clone());

    // Open the success log before touching the keyring so a bad path fails fast.
    let log = log
        .map(SuccessLog::open)
        .transpose()
        .context("Failed to open log file")?;

    let entries = super::load_entries(collection, skiplog).await?;

    let mut prompter = StdinPrompter::new();
    let mut stdout = std::io::stdout();
    let mut importer = Importer::new(&mut prompter, &sink, &mut stdout, options);
    if let Some(log) = log {
        importer = importer.with_success_log(log);
    }
    let summary = importer.run(&entries).await?;

    println!();
    println!(
        "{} imported, {} skipped, {} failed",
        style(summary.imported).green(),
        style(summary.skipped).yellow(),
        if summary.failed > 0 {
            style(summary.failed).red()
        } else {
            style(summary.failed).green()
        },
    );
    Ok(())
}
