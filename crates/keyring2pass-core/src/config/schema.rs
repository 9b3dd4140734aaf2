//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Prefix applied to keyring labels when no path is typed.
pub const DEFAULT_PREFIX: &str = "imported/";

/// Program invoked to insert entries.
pub const DEFAULT_PASS_BIN: &str = "pass";

/// Pause between the two writes of the secret to `pass insert`.
pub const DEFAULT_CONFIRM_DELAY_MS: u64 = 100;

/// Main keyring2pass configuration.
///
/// Every field is optional in the file; command line flags take precedence
/// over whatever is configured here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Prefix for default destination paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Program used for `insert` (defaults to `pass`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_bin: Option<String>,

    /// Label of the keyring collection to read (defaults to the default collection).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,

    /// Success log path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<PathBuf>,

    /// Skip list path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skiplog: Option<PathBuf>,

    /// Delay between the two password writes, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_delay_ms: Option<u64>,
}

impl Config {
    /// Effective destination prefix.
    pub fn prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Effective insertion program.
    pub fn pass_bin(&self) -> &str {
        self.pass_bin.as_deref().unwrap_or(DEFAULT_PASS_BIN)
    }

    /// Effective delay between the two password writes.
    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms.unwrap_or(DEFAULT_CONFIRM_DELAY_MS))
    }
}
