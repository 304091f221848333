//! Error types for scaffold-fs

use std::path::PathBuf;

/// Result type for scaffold-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while materializing files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read an answer for {path}: {source}")]
    Prompt {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn prompt(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Prompt {
            path: path.into(),
            source,
        }
    }
}
