//! Terminal implementation of the user interaction collaborator.

use std::io::{self, BufRead, Write};

use crate::ui::interaction::{Interaction, Notice};

/// Asks on stderr, reads answers from stdin, prints notices.
pub struct TerminalInteraction {
    assume_yes: bool,
}

impl TerminalInteraction {
    /// With `assume_yes` every confirmation is answered yes without asking.
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Interaction for TerminalInteraction {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} [y/N] ", message);
        let _ = stderr.flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read confirmation answer");
                false
            }
        }
    }

    fn notify(&self, notice: Notice) {
        if notice.is_error() {
            eprintln!("{}", notice.message());
        } else {
            println!("{}", notice.message());
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
