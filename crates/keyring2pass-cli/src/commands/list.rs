//! `keyring2pass list`: show what an import would go through.

use std::path::PathBuf;

use clap::Args;
use keyring2pass_core::paths::expand_tilde;
use keyring2pass_core::{Config, SecretEntry};

/// List command arguments.
#[derive(Args)]
pub struct ListArgs {
    /// If a label exists in this file, skip it
    #[arg(long, value_name = "SKIPLOG")]
    pub skiplog: Option<PathBuf>,

    /// Label of the keyring collection to read (default collection if omitted)
    #[arg(long, value_name = "LABEL")]
    pub collection: Option<String>,
}

/// Run the list command.
pub async fn run(args: ListArgs, config: Config) -> anyhow::Result<()> {
    let skiplog = args.skiplog.or(config.skiplog);
    let collection = args.collection.or(config.collection);
    let skiplog = skiplog.map(|p| expand_tilde(&p.to_string_lossy()));

    let entries = super::load_entries(collection, skiplog).await?;
    print!("{}", render(&entries));
    Ok(())
}

/// Format the listing: a count, a blank line, then one label per line.
pub fn render(entries: &[SecretEntry]) -> String {
    let mut out = format!("Passwords to convert: {}\n\n", entries.len());
    for entry in entries {
        out.push_str(&entry.label);
        out.push('\n');
    }
    out
}
