//! Secret entries as read from the keyring.

use crate::labels::SkipSet;
use crate::secret::SecretValue;

/// A single item of the keyring collection: its label and secret.
#[derive(Debug, Clone)]
pub struct SecretEntry {
    /// Human readable label shown by the keyring UI.
    pub label: String,

    /// The secret itself.
    pub secret: SecretValue,
}

impl SecretEntry {
    /// Create a new entry.
    pub fn new(label: impl Into<String>, secret: impl Into<SecretValue>) -> Self {
        Self {
            label: label.into(),
            secret: secret.into(),
        }
    }
}

/// Sort entries by label, ascending.
///
/// The sort is stable, so entries with identical labels keep the order in
/// which the keyring returned them.
pub fn sort_by_label(entries: &mut [SecretEntry]) {
    entries.sort_by(|a, b| a.label.cmp(&b.label));
}

/// Drop every entry whose label appears in `skip`.
pub fn without_skipped(entries: Vec<SecretEntry>, skip: &SkipSet) -> Vec<SecretEntry> {
    entries
        .into_iter()
        .filter(|e| !skip.contains(&e.label))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_label_is_case_sensitive() {
        let mut entries = vec![
            SecretEntry::new("b", "1"),
            SecretEntry::new("B", "2"),
            SecretEntry::new("a", "3"),
        ];
        sort_by_label(&mut entries);
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "a", "b"]);
    }

    #[test]
    fn test_without_skipped() {
        let entries = vec![SecretEntry::new("site/a", "p1"), SecretEntry::new("site/b", "p2")];
        let skip = SkipSet::from_labels(["site/a"]);
        let kept = without_skipped(entries, &skip);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].label, "site/b");
    }
}
