//! wp-scaffold CLI
//!
//! Generates WP-CLI package boilerplate and its Behat test harness.

mod cli;
mod commands;
mod config;
mod error;
mod interactive;
mod logging;

use std::io;
use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use commands::PackageOptions;
use config::ScaffoldConfig;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd, cli.config.as_deref()),
        None => {
            // No command provided - show help hint
            println!("{} WP-CLI package scaffolding", "scaffold".green().bold());
            println!();
            println!("Run {} for available commands.", "scaffold --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        Commands::Package {
            dir,
            name,
            description,
            license,
            skip_tests,
            force,
            host_root,
        } => {
            let config = ScaffoldConfig::load(config_path)?;
            let options = PackageOptions {
                name,
                description,
                license,
                skip_tests,
                force,
                host_root,
            };
            let mut confirm = interactive::confirmer();
            commands::run_package(&dir, &options, &config, &mut *confirm)
        }
        Commands::PackageTests {
            dir,
            force,
            host_root,
        } => {
            let config = ScaffoldConfig::load(config_path)?;
            let mut confirm = interactive::confirmer();
            commands::run_package_tests(&dir, host_root.as_deref(), force, &config, &mut *confirm)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "scaffold", &mut io::stdout());
            Ok(())
        }
    }
}
