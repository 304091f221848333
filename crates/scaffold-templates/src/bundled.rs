//! Harness files shipped inside the binary
//!
//! Paths are relative to the bundle root and use forward slashes.

use tracing::debug;

pub const TRAVIS_CONFIG: &str = include_str!("../bundled/.travis.yml");
pub const LOAD_FEATURE: &str = include_str!("../bundled/templates/load-wp-cli.feature");
pub const INSTALL_SCRIPT: &str = include_str!("../bundled/bin/install-package-tests.sh");

/// Look up a bundled file by its relative path.
pub fn get(relative: &str) -> Option<&'static [u8]> {
    let content = match relative {
        ".travis.yml" => TRAVIS_CONFIG,
        "templates/load-wp-cli.feature" => LOAD_FEATURE,
        "bin/install-package-tests.sh" => INSTALL_SCRIPT,
        _ => {
            debug!(%relative, "bundled::get: no match found");
            return None;
        }
    };
    Some(content.as_bytes())
}
