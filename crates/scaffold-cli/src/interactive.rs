//! Interactive overwrite prompts
//!
//! Uses dialoguer when stdin is a terminal and falls back to line-based
//! answers when input is piped.

use std::io::{self, IsTerminal};
use std::path::Path;

use colored::Colorize;
use dialoguer::Input;
use scaffold_fs::{ConfirmOverwrite, LineConfirm, OverwriteChoice, PROMPT_MARKER, PROMPT_TEXT};

/// Asks on the terminal, repeating the question until it gets `s` or `r`.
pub struct TerminalConfirm;

impl ConfirmOverwrite for TerminalConfirm {
    fn confirm_overwrite(&mut self, path: &Path) -> scaffold_fs::Result<OverwriteChoice> {
        println!("{}: File already exists", "Warning".yellow().bold());
        println!("{}", path.display().to_string().cyan());

        // dialoguer appends its own ": "
        let prompt = format!("{} {}", PROMPT_TEXT, PROMPT_MARKER.trim_end_matches([':', ' ']));
        loop {
            let answer: String = Input::new()
                .with_prompt(&prompt)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| scaffold_fs::Error::prompt(path, io::Error::other(e)))?;

            if let Some(choice) = OverwriteChoice::parse(&answer) {
                return Ok(choice);
            }
        }
    }
}

/// Pick the confirmation source for this process.
pub fn confirmer() -> Box<dyn ConfirmOverwrite> {
    if io::stdin().is_terminal() {
        Box::new(TerminalConfirm)
    } else {
        tracing::debug!("stdin is not a terminal, reading answers line by line");
        Box::new(LineConfirm::new(io::stdin().lock(), io::stdout()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_marker_is_trimmed_for_dialoguer() {
        let marker = PROMPT_MARKER.trim_end_matches([':', ' ']);
        assert_eq!(marker, "[s/r]");
    }
}
