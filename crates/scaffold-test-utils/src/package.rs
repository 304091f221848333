//! [`TestPackage`] wraps a temporary package directory.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary package directory with helpers for setup and assertions.
///
/// # Example
///
/// ```rust,no_run
/// use scaffold_test_utils::TestPackage;
///
/// let package = TestPackage::new();
/// package.write_manifest("{}");
/// package.assert_file_exists("composer.json");
/// ```
pub struct TestPackage {
    temp_dir: TempDir,
}

impl Default for TestPackage {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPackage {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `composer.json` with the given content.
    pub fn write_manifest(&self, content: &str) {
        self.write("composer.json", content);
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Number of regular files anywhere below the root.
    pub fn file_count(&self) -> usize {
        fn count(dir: &Path) -> usize {
            fs::read_dir(dir)
                .unwrap()
                .filter_map(|e| e.ok())
                .map(|e| {
                    let path = e.path();
                    if path.is_dir() { count(&path) } else { 1 }
                })
                .sum()
        }
        count(self.root())
    }

    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, relative: &str, content: &str) {
        let file_content = self.read(relative);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            relative,
            content,
            file_content
        );
    }
}
