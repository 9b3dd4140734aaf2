//! Reading secrets from the desktop keyring and inserting them into `pass`.
//!
//! The keyring side is a [`SecretSource`], backed by the freedesktop Secret
//! Service on Linux. The destination is a [`PasswordSink`], backed by the
//! `pass insert` command.

pub mod error;
pub mod keyring;
pub mod pass;
pub mod sink;
pub mod types;

pub use error::{Result, SecretError};
pub use keyring::{SecretServiceSource, SecretSource};
pub use pass::PassCommand;
pub use sink::PasswordSink;
pub use types::InsertOutcome;
