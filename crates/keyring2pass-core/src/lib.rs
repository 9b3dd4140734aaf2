//! # keyring2pass-core
//!
//! Core types, configuration, and utilities for keyring2pass.
//!
//! This crate provides shared functionality used by the other keyring2pass crates:
//!
//! - **Configuration**: Loading and validation of the optional JSON5 config file
//! - **Types**: Secret entries as read from the keyring
//! - **Label logs**: Skip lists and the append-only success log
//! - **Destination paths**: Validation of user-supplied `pass` paths

pub mod config;
pub mod error;
pub mod labels;
pub mod path;
pub mod paths;
pub mod secret;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use labels::{SkipSet, SuccessLog};
pub use path::DestinationPath;
pub use secret::SecretValue;
pub use types::SecretEntry;
