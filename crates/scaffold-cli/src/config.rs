//! User configuration
//!
//! An optional TOML file supplies defaults the operator would otherwise pass
//! on every invocation:
//!
//! ```toml
//! host_root = "/usr/share/wp-cli"
//! license = "GPL-2.0-or-later"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "wp-scaffold";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Root of the host WP-CLI installation
    #[serde(default)]
    pub host_root: Option<PathBuf>,

    /// License used when `--license` is not given
    #[serde(default)]
    pub license: Option<String>,
}

impl ScaffoldConfig {
    /// Platform default location:
    /// - Linux: `~/.config/wp-scaffold/config.toml`
    /// - macOS: `~/Library/Application Support/wp-scaffold/config.toml`
    /// - Windows: `%APPDATA%\wp-scaffold\config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("config.toml"))
    }

    /// Load the config.
    ///
    /// An explicit path must exist. The default path is optional and a
    /// missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            Some(path) => {
                tracing::debug!(?path, "No config file found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::debug!(?path, "Loading config");
        let content =
            fs::read_to_string(path).map_err(|e| CliError::config(path, e.to_string()))?;
        Self::parse(&content).map_err(|message| CliError::config(path, message))
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
