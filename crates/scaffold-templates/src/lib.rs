//! Package templates for wp-scaffold
//!
//! Templates and harness files are compiled into the binary, so scaffolding
//! works without any files installed next to the executable.

pub mod bundled;
pub mod context;
pub mod error;
pub mod renderer;

pub use context::{DEFAULT_LICENSE, PackageMetadata};
pub use error::{Error, Result};
pub use renderer::{Renderer, TemplateName};
