//! Interactive import of keyring entries into the password store.
//!
//! Each entry moves through `Pending -> {Skipped | PathChosen} -> {Inserted |
//! InsertFailed}`. A failed insertion is reported and the loop moves on; there
//! are no retries and nothing is rolled back.

use std::io::Write;

use console::style;
use keyring2pass_core::config::DEFAULT_PREFIX;
use keyring2pass_core::{DestinationPath, SecretEntry, SuccessLog};
use keyring2pass_secrets::PasswordSink;
use tracing::{debug, info, warn};

use crate::prompt::Prompter;
use crate::Cancelled;

/// How entries are imported.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Prefix of the suggested destination path.
    pub prefix: String,

    /// Replace existing entries in the password store.
    pub overwrite: bool,

    /// Ask for a destination path instead of always using the suggestion.
    pub ask: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            overwrite: false,
            ask: true,
        }
    }
}

/// What to do with a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDecision {
    /// The user declined the entry.
    Skip,

    /// Insert the entry under the chosen path.
    Insert(DestinationPath),
}

/// Counts of what happened during an import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Walks the entries, asks the user about each one and inserts the accepted ones.
pub struct Importer<'a, P: Prompter, S: PasswordSink + ?Sized, W: Write> {
    prompter: &'a mut P,
    sink: &'a S,
    out: &'a mut W,
    log: Option<SuccessLog>,
    options: ImportOptions,
}

impl<'a, P: Prompter, S: PasswordSink + ?Sized, W: Write> Importer<'a, P, S, W> {
    /// Create an importer that prompts through `prompter`, inserts into `sink`
    /// and reports progress to `out`.
    pub fn new(prompter: &'a mut P, sink: &'a S, out: &'a mut W, options: ImportOptions) -> Self {
        Self {
            prompter,
            sink,
            out,
            log: None,
            options,
        }
    }

    /// Record every successfully imported label in `log`.
    pub fn with_success_log(mut self, log: SuccessLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Import `entries` in the given order.
    ///
    /// Fails only when the user cancels or the success log cannot be written;
    /// insertion failures are counted in the summary.
    pub async fn run(&mut self, entries: &[SecretEntry]) -> anyhow::Result<ImportSummary> {
        writeln!(self.out, "Now converting...")?;
        writeln!(self.out)?;
        writeln!(self.out, "Passwords to convert: {}", entries.len())?;
        writeln!(self.out)?;
        writeln!(self.out)?;

        let mut summary = ImportSummary::default();
        for entry in entries {
            match self.decide(&entry.label)? {
                ImportDecision::Skip => {
                    writeln!(self.out, "Skipped")?;
                    summary.skipped += 1;
                }
                ImportDecision::Insert(path) => {
                    if self.insert(entry, &path).await? {
                        summary.imported += 1;
                    } else {
                        summary.failed += 1;
                    }
                }
            }
        }

        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            failed = summary.failed,
            "import finished"
        );
        Ok(summary)
    }

    /// Ask whether to import `label` and, if so, where to.
    pub fn decide(&mut self, label: &str) -> anyhow::Result<ImportDecision> {
        if !self.confirm(label)? {
            return Ok(ImportDecision::Skip);
        }
        Ok(ImportDecision::Insert(self.choose_path(label)?))
    }

    fn confirm(&mut self, label: &str) -> anyhow::Result<bool> {
        let prompt = format!("Import '{}'? [Y/n] ", label);
        loop {
            let answer = self.ask(&prompt)?;
            match answer.trim().to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => {}
            }
        }
    }

    fn choose_path(&mut self, label: &str) -> anyhow::Result<DestinationPath> {
        let default = DestinationPath::default_for(&self.options.prefix, label);
        if !self.options.ask {
            return Ok(default);
        }

        let prompt = format!("Import path [{}]: ", default);
        loop {
            let input = self.ask(&prompt)?;
            if input.trim().is_empty() {
                return Ok(default);
            }
            match DestinationPath::parse(&input) {
                Ok(path) => return Ok(path),
                Err(e) => {
                    debug!("{e}");
                    writeln!(
                        self.out,
                        "  {} use path segments of letters, digits and '_', separated by '/'",
                        style("!").yellow()
                    )?;
                }
            }
        }
    }

    /// Insert one entry. Returns whether it ended up in the store.
    async fn insert(&mut self, entry: &SecretEntry, path: &DestinationPath) -> anyhow::Result<bool> {
        match self.sink.insert(path, &entry.secret, self.options.overwrite).await {
            Ok(outcome) if outcome.success() => {
                info!(label = %entry.label, path = %path, "imported");
                if let Some(log) = self.log.as_mut() {
                    log.record(&entry.label)?;
                }
                Ok(true)
            }
            Ok(outcome) => {
                warn!(label = %entry.label, exit_code = outcome.exit_code, "insert failed");
                writeln!(self.out, "{}", style("Something went wrong...").red())?;
                writeln!(self.out, "{}", outcome.stdout)?;
                writeln!(self.out, "{}", outcome.stderr)?;
                Ok(false)
            }
            Err(e) => {
                warn!(label = %entry.label, error = %e, "insert failed");
                writeln!(self.out, "{}", style("Something went wrong...").red())?;
                writeln!(self.out, "{}", e)?;
                Ok(false)
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompter.ask(prompt)?.ok_or_else(|| Cancelled.into())
    }
}
