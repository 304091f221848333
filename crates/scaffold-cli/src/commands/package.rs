//! package command implementation
//!
//! Renders the package templates into the target directory, then hands over
//! to package-tests unless told to skip them.

use std::path::{Path, PathBuf};

use colored::Colorize;
use scaffold_fs::{ConfirmOverwrite, MaterializeReport, WriteRequest, materialize};
use scaffold_templates::{PackageMetadata, Renderer, TemplateName};

use crate::config::ScaffoldConfig;
use crate::error::Result;

use super::package_tests;

/// Options for `scaffold package`, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageOptions {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub skip_tests: bool,
    pub force: bool,
    pub host_root: Option<PathBuf>,
}

/// Built-in defaults, then the config file, then command-line flags.
pub fn package_metadata(options: &PackageOptions, config: &ScaffoldConfig) -> PackageMetadata {
    PackageMetadata::default()
        .merge(None, None, config.license.clone())
        .merge(
            options.name.clone(),
            options.description.clone(),
            options.license.clone(),
        )
}

/// One request per package template, in creation order.
pub fn package_requests(
    package_dir: &Path,
    meta: &PackageMetadata,
    renderer: &Renderer,
) -> Result<Vec<WriteRequest>> {
    TemplateName::ALL
        .into_iter()
        .map(|template| -> Result<WriteRequest> {
            let content = renderer.render(template, meta)?;
            Ok(WriteRequest::new(package_dir.join(template.file_name()), content))
        })
        .collect()
}

/// Render and write the package files. Does not touch the test harness.
pub fn scaffold_package(
    package_dir: &Path,
    meta: &PackageMetadata,
    force: bool,
    confirm: &mut dyn ConfirmOverwrite,
) -> Result<MaterializeReport> {
    let renderer = Renderer::new()?;
    let requests = package_requests(package_dir, meta, &renderer)?;
    Ok(materialize(&requests, force, confirm)?)
}

/// Run the package command
pub fn run_package(
    dir: &Path,
    options: &PackageOptions,
    config: &ScaffoldConfig,
    confirm: &mut dyn ConfirmOverwrite,
) -> Result<()> {
    // Fail before writing anything if the harness step cannot run
    let host_root = if options.skip_tests {
        None
    } else {
        Some(package_tests::resolve_host_root(
            options.host_root.as_deref(),
            config,
        )?)
    };

    let meta = package_metadata(options, config);
    println!(
        "{} Scaffolding package in {}...",
        "=>".blue().bold(),
        dir.display().to_string().cyan()
    );
    if !meta.name.is_empty() {
        println!("   Name: {}", meta.name.yellow());
    }
    println!("   License: {}", meta.license.yellow());
    tracing::info!(dir = %dir.display(), name = %meta.name, license = %meta.license, "Scaffolding package");

    let report = scaffold_package(dir, &meta, options.force, confirm)?;
    super::print_report(&report, "package");

    if let Some(host_root) = host_root {
        package_tests::run_package_tests(dir, Some(&host_root), options.force, config, confirm)?;
    }

    Ok(())
}
