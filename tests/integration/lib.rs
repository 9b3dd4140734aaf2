//! Shared helpers for the integration tests.

use std::collections::VecDeque;
use std::io;
use std::path::Path;
use std::time::Duration;

use keyring2pass_cli::Prompter;
use keyring2pass_secrets::PassCommand;

/// A `pass` stand-in that appends `<args>|<first line>|<second line>` to
/// `record` and fails for any path listed in `reject`.
pub fn recording_pass(record: &Path, reject: &[&str]) -> PassCommand {
    let mut script = String::new();
    for path in reject {
        script.push_str(&format!(
            "[ \"$3\" = '{path}' ] || [ \"$2\" = '{path}' ] && {{ echo 'Error: refusing {path}' >&2; exit 1; }}\n"
        ));
    }
    script.push_str(&format!(
        "read first; read second; printf '%s|%s|%s\\n' \"$*\" \"$first\" \"$second\" >> '{}'\n",
        record.display()
    ));

    PassCommand::new("/bin/sh")
        .with_arg("-c")
        .with_arg(script)
        .with_arg("pass")
        .with_confirm_delay(Duration::from_millis(5))
}

/// Answers prompts from a fixed list.
pub struct Answers {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl Answers {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for Answers {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
