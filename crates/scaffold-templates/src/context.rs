//! Template context for package files

use serde::Serialize;

/// License used when neither the operator nor the config picks one.
pub const DEFAULT_LICENSE: &str = "MIT";

/// Metadata rendered into the package templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageMetadata {
    /// Composer package name, e.g. `acme/hello-world`
    pub name: String,
    pub description: String,
    pub license: String,
}

impl Default for PackageMetadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            license: DEFAULT_LICENSE.to_string(),
        }
    }
}

impl PackageMetadata {
    /// Overlay the given values; `None` keeps the current one.
    pub fn merge(
        mut self,
        name: Option<String>,
        description: Option<String>,
        license: Option<String>,
    ) -> Self {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(license) = license {
            self.license = license;
        }
        self
    }
}
