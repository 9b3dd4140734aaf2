//! Configuration loading and validation.

use super::Config;
use crate::error::ConfigError;
use crate::paths;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Upper bound for `confirm_delay_ms`.
const MAX_CONFIRM_DELAY_MS: u64 = 10_000;

impl Config {
    /// Load configuration from the default path.
    ///
    /// A missing default file yields the default configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = paths::config_file()?;
        match Self::load(&path) {
            Err(ConfigError::NotFound(_)) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from a string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::Json5(e.to_string()))
    }

    /// Serialize to a JSON5-compatible string.
    pub fn to_json5(&self) -> Result<String, ConfigError> {
        // json5 doesn't have a serializer, so we use serde_json with pretty print
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the configuration, collecting all errors before returning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(bin) = &self.pass_bin {
            if bin.trim().is_empty() {
                errors.push("pass_bin must not be empty".to_string());
            }
        }

        if let Some(prefix) = &self.prefix {
            if prefix.starts_with('/') {
                errors.push(format!(
                    "prefix '{}' must be relative to the password store",
                    prefix
                ));
            }
        }

        if let Some(delay) = self.confirm_delay_ms {
            if delay > MAX_CONFIRM_DELAY_MS {
                errors.push(format!(
                    "confirm_delay_ms must be at most {}, got {}",
                    MAX_CONFIRM_DELAY_MS, delay
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors.join("; ")))
        }
    }
}
