//! Result of a single `pass insert` run.

/// Exit status and captured output of an insertion command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertOutcome {
    /// Exit code, `-1` when the process was terminated by a signal.
    pub exit_code: i32,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,
}

impl InsertOutcome {
    /// Check if the insertion succeeded.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
