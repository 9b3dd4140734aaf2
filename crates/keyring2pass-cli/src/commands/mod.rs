//! CLI command implementations.

pub mod import;
pub mod list;

use std::path::{Path, PathBuf};

use anyhow::Context;
use keyring2pass_core::types::without_skipped;
use keyring2pass_core::{Config, SecretEntry, SkipSet};
use keyring2pass_secrets::{SecretServiceSource, SecretSource};
use tracing::debug;

/// Load the config file given on the command line, or the default one.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_default().context("Failed to load config")?,
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Read the keyring and drop everything listed in the skip log.
pub async fn load_entries(
    collection: Option<String>,
    skiplog: Option<PathBuf>,
) -> anyhow::Result<Vec<SecretEntry>> {
    let skip = match &skiplog {
        Some(path) => SkipSet::load(path).context("Failed to open skip log")?,
        None => SkipSet::new(),
    };

    let mut source = SecretServiceSource::new();
    if let Some(name) = collection {
        source = source.with_collection(name);
    }

    // D-Bus calls block; keep them off the runtime's worker threads.
    let entries = tokio::task::spawn_blocking(move || source.load_entries())
        .await
        .context("Keyring reader panicked")?
        .context("Failed to read the keyring")?;

    let total = entries.len();
    let entries = without_skipped(entries, &skip);
    debug!(total, remaining = entries.len(), "applied skip log");
    Ok(entries)
}
