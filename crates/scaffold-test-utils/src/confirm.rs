//! [`ScriptedConfirm`] answers overwrite prompts from a fixed script.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use scaffold_fs::{ConfirmOverwrite, OverwriteChoice};

/// Replays a queue of choices and records every path it was asked about.
///
/// # Panics
/// Panics if asked more often than it has answers, so unexpected prompts
/// fail the test loudly.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<OverwriteChoice>,
    asked: Vec<PathBuf>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = OverwriteChoice>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// A responder that must never be consulted.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Paths the materializer asked about, in order.
    pub fn asked(&self) -> &[PathBuf] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ConfirmOverwrite for ScriptedConfirm {
    fn confirm_overwrite(&mut self, path: &Path) -> scaffold_fs::Result<OverwriteChoice> {
        self.asked.push(path.to_path_buf());
        Ok(self
            .answers
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedConfirm: no answer left for {}", path.display())))
    }
}
