//! Destination store abstraction.

use async_trait::async_trait;
use keyring2pass_core::{DestinationPath, SecretValue};

use crate::error::Result;
use crate::types::InsertOutcome;

/// Async trait for password store backends that entries are inserted into.
#[async_trait]
pub trait PasswordSink: Send + Sync {
    /// Insert `secret` under `path`, replacing an existing entry when
    /// `overwrite` is set.
    ///
    /// A command that runs but fails is reported through the returned
    /// [`InsertOutcome`]; `Err` means it could not be run at all.
    async fn insert(
        &self,
        path: &DestinationPath,
        secret: &SecretValue,
        overwrite: bool,
    ) -> Result<InsertOutcome>;
}
