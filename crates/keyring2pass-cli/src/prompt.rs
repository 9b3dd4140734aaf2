//! Line-based terminal prompts.

use std::io::{self, BufRead, Write};

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Show `prompt` and read one line of input, without its line terminator.
    ///
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompts on stdout and reads answers from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }
}

// Reads block the calling thread. The import loop waits on the user anyway,
// so nothing else on the runtime is held up.
impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{prompt}")?;
        stdout.flush()?;
        read_answer(&mut io::stdin().lock())
    }
}

/// Read one answer line from `reader`.
fn read_answer(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(&['\n', '\r'][..]).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
