//! Destination paths inside the password store.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Segments of word characters joined by single slashes.
static VALID_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+(?:/\w+)*$").expect("destination path pattern is valid")
});

/// A path under which an entry is inserted into `pass`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPath(String);

impl DestinationPath {
    /// The path used when the user accepts the suggestion: `prefix + label`.
    ///
    /// This is taken as-is; keyring labels routinely contain characters that
    /// a typed path would be rejected for.
    pub fn default_for(prefix: &str, label: &str) -> Self {
        Self(format!("{prefix}{label}"))
    }

    /// Validate a path typed by the user. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if is_valid(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidPath(input.to_string()))
        }
    }

    /// The path as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DestinationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DestinationPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check whether `path` is an acceptable user-supplied destination.
pub fn is_valid(path: &str) -> bool {
    VALID_PATH.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_paths() {
        for path in ["email", "website/github/me", "chat/slack/acme_corp", "a", "a/b"] {
            assert!(is_valid(path), "{path} should be valid");
        }
    }

    #[test]
    fn test_invalid_paths() {
        for path in [
            "",
            "/leading",
            "trailing/",
            "double//slash",
            "has space",
            "dots.are.out",
            "../escape",
            "/",
        ] {
            assert!(!is_valid(path), "{path:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let path = DestinationPath::parse("  sites/github \n").unwrap();
        assert_eq!(path.as_str(), "sites/github");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let err = DestinationPath::parse("bad path").unwrap_err();
        assert_eq!(err.to_string(), r#"Invalid destination path: "bad path""#);
        let Error::InvalidPath(input) = err;
        assert_eq!(input, "bad path");
    }

    #[test]
    fn test_single_char_and_unicode_segments_accepted() {
        // One word character is a complete segment, and `\w` is Unicode-aware.
        assert!(is_valid("a"));
        assert!(is_valid("x/y"));
        assert!(is_valid("é"));
        assert!(is_valid("mail/jürgen"));
        assert!(is_valid("web/日本"));
        // Punctuation inside a segment is still rejected.
        assert!(!is_valid("a-b"));
        assert!(!is_valid("a/b-c"));
    }

    #[test]
    fn test_default_for_concatenates() {
        let path = DestinationPath::default_for("imported/", "My Mail (work)");
        assert_eq!(path.as_str(), "imported/My Mail (work)");
    }
}
