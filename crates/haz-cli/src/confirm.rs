//! Yes/no confirmation capability.
//!
//! The overwrite prompt is an external collaborator, not core logic; hiding
//! it behind a trait lets the pipeline run without a terminal.

use std::io::{self, BufRead, Write};

/// Asks the operator a yes/no question.
pub trait Confirmation {
    /// Present `prompt` and return whether the operator answered yes.
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Reads one line from stdin; only a trimmed `y` counts as yes.
#[derive(Debug, Default)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{prompt}");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer.trim() == "y")
    }
}

/// Always answers yes (the `--yes` flag).
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Confirmation for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> io::Result<bool> {
        Ok(true)
    }
}
