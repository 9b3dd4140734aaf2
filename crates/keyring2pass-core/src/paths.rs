//! Path resolution utilities.

use crate::error::ConfigError;
use std::path::PathBuf;

/// Get the keyring2pass config directory (`~/.config/keyring2pass` on Linux).
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::Validation("Could not determine config directory".to_string())
    })?;
    Ok(dir.join("keyring2pass"))
}

/// Get the default config file path (`<config_dir>/config.json5`).
pub fn config_file() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.json5"))
}

/// Expand tilde (~) in a path.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
