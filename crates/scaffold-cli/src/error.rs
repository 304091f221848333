//! Error types for scaffold-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Materialization failure (unreadable source, unwritable destination, prompt)
    #[error(transparent)]
    Fs(#[from] scaffold_fs::Error),

    /// Template registration or rendering failure
    #[error(transparent)]
    Template(#[from] scaffold_templates::Error),

    /// Config file could not be read or parsed
    #[error("Invalid config at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Bad or missing input from the operator
    #[error("{message}")]
    Validation { message: String },
}

impl CliError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
