//! Overwrite confirmation
//!
//! The materializer never talks to a terminal directly. It asks a
//! [`ConfirmOverwrite`] implementation, which lets tests script the answers.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::{Error, Result};

/// Question shown before replacing an existing file.
pub const PROMPT_TEXT: &str = "Skip this file, or replace it with scaffolding?";

/// Accepted answers, appended to [`PROMPT_TEXT`].
pub const PROMPT_MARKER: &str = "[s/r]: ";

/// The operator's decision for an existing destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    Skip,
    Replace,
}

impl OverwriteChoice {
    /// Parse an operator answer.
    ///
    /// Returns `None` for anything that is not a recognised answer; callers
    /// must ask again rather than pick a default.
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "s" | "skip" => Some(Self::Skip),
            "r" | "replace" => Some(Self::Replace),
            _ => None,
        }
    }

    pub fn should_write(self) -> bool {
        self == Self::Replace
    }
}

/// Capability to decide whether an existing file gets replaced.
pub trait ConfirmOverwrite {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<OverwriteChoice>;
}

impl<C: ConfirmOverwrite + ?Sized> ConfirmOverwrite for &mut C {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<OverwriteChoice> {
        (**self).confirm_overwrite(path)
    }
}

/// Line-oriented confirmation over any reader/writer pair.
///
/// Used when stdin is not a terminal (piped answers) and in tests.
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmOverwrite for LineConfirm<R, W> {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<OverwriteChoice> {
        writeln!(self.output, "Warning: File already exists\n{}", path.display())
            .map_err(|e| Error::prompt(path, e))?;

        loop {
            write!(self.output, "{} {}", PROMPT_TEXT, PROMPT_MARKER)
                .and_then(|_| self.output.flush())
                .map_err(|e| Error::prompt(path, e))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| Error::prompt(path, e))?;
            if read == 0 {
                return Err(Error::prompt(
                    path,
                    std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "input closed before an answer was given",
                    ),
                ));
            }

            match OverwriteChoice::parse(&line) {
                Some(choice) => return Ok(choice),
                None => tracing::debug!(answer = %line.trim(), "Unrecognised answer, asking again"),
            }
        }
    }
}
