//! Label log files.
//!
//! Both the skip list and the success log are plain text files with one
//! label per line. A success log written by one run can be passed as the
//! skip list of the next, which makes an interrupted import resumable.

use crate::error::LabelLogError;
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Labels to leave out of listing and importing.
#[derive(Debug, Clone, Default)]
pub struct SkipSet {
    labels: HashSet<String>,
}

impl SkipSet {
    /// An empty skip set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a skip set from labels already in memory.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a skip set from `path`, creating the file if it does not exist.
    pub fn load(path: &Path) -> Result<Self, LabelLogError> {
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(|source| LabelLogError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| LabelLogError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let set = Self::parse(&content);
        debug!(path = %path.display(), count = set.len(), "loaded skip list");
        Ok(set)
    }

    /// Parse skip-list content: one label per line, blank lines ignored.
    ///
    /// Only the line terminator is stripped; labels are otherwise compared
    /// exactly, including surrounding whitespace.
    pub fn parse(content: &str) -> Self {
        Self::from_labels(content.lines().filter(|line| !line.is_empty()))
    }

    /// Whether `label` should be skipped.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// Number of labels in the set.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Append-only log of successfully imported labels.
#[derive(Debug)]
pub struct SuccessLog {
    path: PathBuf,
    file: File,
}

impl SuccessLog {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LabelLogError> {
        let path = path.into();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| LabelLogError::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self { path, file })
    }

    /// Record `label` as imported. The line is flushed immediately.
    pub fn record(&mut self, label: &str) -> Result<(), LabelLogError> {
        writeln!(self.file, "{label}")
            .and_then(|_| self.file.flush())
            .map_err(|source| LabelLogError::Append {
                path: self.path.clone(),
                source,
            })
    }
}
