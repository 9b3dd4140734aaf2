//! Insertion through the `pass` command line tool.
//!
//! `pass insert` asks for the password and then for a confirmation. Both
//! answers are typed into its standard input with a short pause between them,
//! after which input is closed and the exit status decides the outcome.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use keyring2pass_core::config::{DEFAULT_CONFIRM_DELAY_MS, DEFAULT_PASS_BIN};
use keyring2pass_core::{DestinationPath, SecretValue};
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};
use tracing::debug;

use crate::error::{Result, SecretError};
use crate::sink::PasswordSink;
use crate::types::InsertOutcome;

/// Runs `<program> [args..] insert [-f] <path>` for every entry.
#[derive(Debug, Clone)]
pub struct PassCommand {
    program: String,
    args: Vec<String>,
    confirm_delay: Duration,
}

impl Default for PassCommand {
    fn default() -> Self {
        Self::new(DEFAULT_PASS_BIN)
    }
}

impl PassCommand {
    /// Create a runner for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            confirm_delay: Duration::from_millis(DEFAULT_CONFIRM_DELAY_MS),
        }
    }

    /// Add an argument placed before `insert`.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set the pause between the password and its confirmation.
    pub fn with_confirm_delay(mut self, delay: Duration) -> Self {
        self.confirm_delay = delay;
        self
    }

    /// Arguments passed after the leading ones.
    fn insert_args(path: &DestinationPath, overwrite: bool) -> Vec<&str> {
        let mut args = vec!["insert"];
        if overwrite {
            args.push("-f");
        }
        args.push(path.as_str());
        args
    }
}

#[async_trait]
impl PasswordSink for PassCommand {
    async fn insert(
        &self,
        path: &DestinationPath,
        secret: &SecretValue,
        overwrite: bool,
    ) -> Result<InsertOutcome> {
        let text = secret
            .expose_str()
            .ok_or_else(|| SecretError::NotUtf8(path.to_string()))?;
        let mut line = String::with_capacity(text.len() + 1);
        line.push_str(text);
        line.push('\n');
        let line = SecretValue::new(line.into_bytes());

        let args = Self::insert_args(path, overwrite);
        debug!(program = %self.program, ?args, "running insert");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SecretError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if feed(&mut stdin, line.expose_bytes()).await? {
                tokio::time::sleep(self.confirm_delay).await;
                feed(&mut stdin, line.expose_bytes()).await?;
            }
            // Dropping stdin closes the pipe.
        }

        let output = child.wait_with_output().await?;
        let outcome = InsertOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(exit_code = outcome.exit_code, "insert finished");
        Ok(outcome)
    }
}

/// Write one line to the child.
///
/// Returns `false` when the child has already closed its input; the exit
/// status will tell what happened.
async fn feed(stdin: &mut ChildStdin, bytes: &[u8]) -> Result<bool> {
    let written = match stdin.write_all(bytes).await {
        Ok(()) => stdin.flush().await,
        Err(e) => Err(e),
    };
    match written {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("insert command closed its input early");
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}
