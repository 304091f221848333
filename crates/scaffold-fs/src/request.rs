//! Write requests and their outcomes

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Where the content of a destination file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Content already in memory (rendered template, bundled file).
    Bytes(Vec<u8>),
    /// Copy the file at this path verbatim.
    Copy(PathBuf),
}

impl ContentSource {
    /// Produce the bytes to write.
    ///
    /// Copy sources are read lazily, so a skipped request never touches its
    /// source file.
    pub fn produce(&self) -> Result<Vec<u8>> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.clone()),
            Self::Copy(path) => fs::read(path).map_err(|e| Error::io(path, e)),
        }
    }
}

impl From<String> for ContentSource {
    fn from(content: String) -> Self {
        Self::Bytes(content.into_bytes())
    }
}

impl From<&str> for ContentSource {
    fn from(content: &str) -> Self {
        Self::Bytes(content.as_bytes().to_vec())
    }
}

impl From<&[u8]> for ContentSource {
    fn from(content: &[u8]) -> Self {
        Self::Bytes(content.to_vec())
    }
}

/// A single file to materialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub destination: PathBuf,
    pub source: ContentSource,
    /// Set the executable bits after writing.
    pub executable: bool,
}

impl WriteRequest {
    pub fn new(destination: impl Into<PathBuf>, source: impl Into<ContentSource>) -> Self {
        Self {
            destination: destination.into(),
            source: source.into(),
            executable: false,
        }
    }

    /// Request a verbatim copy of `from` into `destination`.
    pub fn copy(destination: impl Into<PathBuf>, from: impl Into<PathBuf>) -> Self {
        Self::new(destination, ContentSource::Copy(from.into()))
    }

    pub fn executable(mut self, executable: bool) -> Self {
        self.executable = executable;
        self
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// What happened to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Skipped,
}

impl WriteOutcome {
    pub fn is_written(self) -> bool {
        self == Self::Written
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Written => write!(f, "written"),
            Self::Skipped => write!(f, "skipped"),
        }
    }
}
