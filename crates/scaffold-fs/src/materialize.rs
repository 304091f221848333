//! The materialize loop

use std::path::{Path, PathBuf};

use crate::confirm::{ConfirmOverwrite, OverwriteChoice};
use crate::request::{WriteOutcome, WriteRequest};
use crate::{Result, io};

/// Ordered record of what [`materialize`] did with each request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    entries: Vec<(PathBuf, WriteOutcome)>,
}

impl MaterializeReport {
    pub fn entries(&self) -> &[(PathBuf, WriteOutcome)] {
        &self.entries
    }

    /// True when at least one file was written.
    pub fn any_written(&self) -> bool {
        self.entries.iter().any(|(_, outcome)| outcome.is_written())
    }

    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.with_outcome(WriteOutcome::Written)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.with_outcome(WriteOutcome::Skipped)
    }

    /// Outcome recorded for `path`, if it was part of the run.
    pub fn outcome(&self, path: &Path) -> Option<WriteOutcome> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, outcome)| *outcome)
    }

    fn with_outcome(&self, wanted: WriteOutcome) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(move |(_, outcome)| *outcome == wanted)
            .map(|(path, _)| path.as_path())
    }
}

/// Ensure every destination in `requests` exists with its content.
///
/// Existing destinations are replaced when `force` is set; otherwise
/// `confirm` decides. The first error aborts the run and files written so far
/// are left in place.
pub fn materialize<C>(
    requests: &[WriteRequest],
    force: bool,
    confirm: &mut C,
) -> Result<MaterializeReport>
where
    C: ConfirmOverwrite + ?Sized,
{
    let mut report = MaterializeReport::default();

    for request in requests {
        let destination = request.destination();
        let exists = destination.exists();

        if exists {
            tracing::debug!(path = %destination.display(), "File already exists");
            let choice = if force {
                OverwriteChoice::Replace
            } else {
                confirm.confirm_overwrite(destination)?
            };

            if !choice.should_write() {
                tracing::info!(path = %destination.display(), "Skipping");
                report.entries.push((destination.to_path_buf(), WriteOutcome::Skipped));
                continue;
            }
            tracing::info!(path = %destination.display(), "Replacing");
        }

        let content = request.source.produce()?;
        io::write_atomic(destination, &content)?;
        if request.executable {
            io::set_executable(destination)?;
        }

        tracing::debug!(path = %destination.display(), bytes = content.len(), "Wrote file");
        report.entries.push((destination.to_path_buf(), WriteOutcome::Written));
    }

    Ok(report)
}
