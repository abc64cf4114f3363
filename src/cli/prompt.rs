//! Interactive input.

use anyhow::{Context, Result};
use std::io::{self, BufRead, IsTerminal, Write};

/// Source of interactive answers (allows scripting in tests).
pub trait Prompter {
    /// Shows `prompt` and returns one line of input, without the line ending.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Whether a person is on the other end. Pagination only pauses when this
    /// is true.
    fn is_interactive(&self) -> bool;

    /// Asks a yes/no question; only "y" and "yes" (any case) count as yes.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}

/// Prompts on stdout and reads answers from stdin.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush().context("failed to write prompt")?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }
}
