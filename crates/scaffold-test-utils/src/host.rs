//! [`FakeHost`] builds a minimal host tool installation on disk.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Files the test-harness scaffold copies out of the host installation.
pub const HOST_FILES: &[&str] = &[
    "features/bootstrap/FeatureContext.php",
    "features/bootstrap/support.php",
    "php/WP_CLI/Process.php",
    "php/utils.php",
    "ci/behat-tags.php",
    "features/steps/given.php",
    "features/steps/when.php",
    "features/steps/then.php",
    "features/extra/no-mail.php",
];

/// A temporary directory laid out like a host tool installation.
///
/// Every file in [`HOST_FILES`] exists and contains `<?php // <relative path>`,
/// so tests can check which source a copied file came from.
pub struct FakeHost {
    temp_dir: TempDir,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    pub fn new() -> Self {
        let host = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        for file in HOST_FILES {
            host.write(file, &Self::marker(file));
        }
        host
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Content written for `relative` by [`FakeHost::new`].
    pub fn marker(relative: &str) -> String {
        format!("<?php // {}\n", relative)
    }

    /// Overwrite or add a file under the host root.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Delete a file under the host root.
    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.root().join(relative)).unwrap();
    }
}
