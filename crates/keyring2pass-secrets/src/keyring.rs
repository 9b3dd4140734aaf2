//! Desktop keyring access.
//!
//! Entries are read from the freedesktop Secret Service over D-Bus (GNOME
//! Keyring, KWallet's Secret Service bridge, KeePassXC, ...). The collection is
//! resolved in priority order:
//! 1. The collection whose label matches the configured name
//! 2. The default collection (the `default` alias, usually "Login")
//!
//! On platforms other than Linux no Secret Service is available and loading
//! fails with [`SecretError::UnsupportedPlatform`].

use keyring2pass_core::types::sort_by_label;
use keyring2pass_core::SecretEntry;

use crate::error::Result;
#[cfg(not(target_os = "linux"))]
use crate::error::SecretError;

/// A provider of keyring entries.
pub trait SecretSource {
    /// Read every entry of the collection, sorted by label.
    fn load_entries(&self) -> Result<Vec<SecretEntry>>;
}

/// Reads entries from a Secret Service collection.
#[derive(Debug, Clone, Default)]
pub struct SecretServiceSource {
    collection: Option<String>,
}

impl SecretServiceSource {
    /// Read from the default collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from the collection labelled `label` instead of the default one.
    pub fn with_collection(mut self, label: impl Into<String>) -> Self {
        self.collection = Some(label.into());
        self
    }

    /// The configured collection label, if any.
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }
}

impl SecretSource for SecretServiceSource {
    fn load_entries(&self) -> Result<Vec<SecretEntry>> {
        let mut entries = read_collection(self.collection.as_deref())?;
        sort_by_label(&mut entries);
        Ok(entries)
    }
}

// ---------------------------------------------------------------------------
// Linux: Secret Service over D-Bus
// ---------------------------------------------------------------------------

#[cfg(target_os = "linux")]
fn read_collection(name: Option<&str>) -> Result<Vec<SecretEntry>> {
    use crate::error::SecretError;
    use dbus_secret_service::{EncryptionType, SecretService};
    use tracing::{debug, warn};

    let service = SecretService::connect(EncryptionType::Plain)
        .map_err(|e| SecretError::Unavailable(e.to_string()))?;

    let collection = match name {
        Some(wanted) => {
            let mut found = None;
            for candidate in service
                .get_all_collections()
                .map_err(|e| SecretError::Keyring(format!("listing collections failed: {e}")))?
            {
                match candidate.get_label() {
                    Ok(label) if label == wanted => {
                        found = Some(candidate);
                        break;
                    }
                    Ok(_) => {}
                    Err(e) => warn!("skipping collection with unreadable label: {e}"),
                }
            }
            found.ok_or_else(|| SecretError::CollectionNotFound(wanted.to_string()))?
        }
        None => service
            .get_default_collection()
            .map_err(|e| SecretError::CollectionNotFound(format!("default ({e})")))?,
    };

    collection
        .ensure_unlocked()
        .map_err(|e| SecretError::Locked(e.to_string()))?;

    let items = collection
        .get_all_items()
        .map_err(|e| SecretError::Keyring(format!("listing items failed: {e}")))?;
    debug!(count = items.len(), "read keyring collection");

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        let label = item
            .get_label()
            .map_err(|e| SecretError::Keyring(format!("reading item label failed: {e}")))?;
        item.ensure_unlocked()
            .map_err(|e| SecretError::Locked(format!("{label}: {e}")))?;
        let secret = item
            .get_secret()
            .map_err(|e| SecretError::Keyring(format!("reading secret of '{label}' failed: {e}")))?;
        entries.push(SecretEntry::new(label, secret));
    }

    Ok(entries)
}

// ---------------------------------------------------------------------------
// Fallback for other platforms
// ---------------------------------------------------------------------------

#[cfg(not(target_os = "linux"))]
fn read_collection(_name: Option<&str>) -> Result<Vec<SecretEntry>> {
    Err(SecretError::UnsupportedPlatform)
}
