//! Terminal confirmation

use std::io::{self, BufRead, Write};

use crate::workflow::{ConfirmationPrompt, Confirmer};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn ask(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_yes(&answer)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Confirms status changes interactively
pub struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&self, prompt: &ConfirmationPrompt) -> bool {
        ask(&prompt.question())
    }
}
