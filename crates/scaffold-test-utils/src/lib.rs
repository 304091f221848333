//! Shared test utilities for the wp-scaffold workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`package`]: [`TestPackage`] temporary package directory
//! - [`host`]: [`FakeHost`] stand-in for a host tool installation
//! - [`confirm`]: [`ScriptedConfirm`] responder for overwrite prompts

pub mod confirm;
pub mod host;
pub mod package;

pub use confirm::ScriptedConfirm;
pub use host::{FakeHost, HOST_FILES};
pub use package::TestPackage;
