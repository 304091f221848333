//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// wp-scaffold - Generate WP-CLI package boilerplate and its test harness
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to the platform config dir)
    #[arg(long, global = true, env = "SCAFFOLD_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the files needed for a basic WP-CLI command
    ///
    /// Creates .gitignore, .editorconfig, wp-cli.yml, command.php and
    /// composer.json, then the test harness unless --skip-tests is given.
    /// The harness needs a WP-CLI installation root (--host-root).
    ///
    /// Examples:
    ///   scaffold package ./hello-world --name=acme/hello-world --host-root=/usr/share/wp-cli
    ///   scaffold package ./hello-world --skip-tests --force
    Package {
        /// Directory for the new package
        dir: PathBuf,

        /// Name to appear in the composer.json
        #[arg(long)]
        name: Option<String>,

        /// Human-readable description for the package
        #[arg(long)]
        description: Option<String>,

        /// License for the package [default: MIT]
        #[arg(long)]
        license: Option<String>,

        /// Don't generate files for integration testing
        #[arg(long)]
        skip_tests: bool,

        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,

        /// Root of the host WP-CLI installation (required unless --skip-tests)
        ///
        /// Falls back to host_root in the config file. Checked before any
        /// file is written.
        #[arg(long, env = "WP_CLI_ROOT", value_name = "DIR")]
        host_root: Option<PathBuf>,
    },

    /// Generate files needed for writing Behat tests for your command
    ///
    /// Creates .travis.yml, bin/install-package-tests.sh, features/load-wp-cli.feature
    /// and the features/bootstrap, features/steps, features/extra support files.
    /// The package directory must contain composer.json.
    ///
    /// Examples:
    ///   scaffold package-tests /path/to/command/dir/
    PackageTests {
        /// The package directory to generate tests for
        dir: PathBuf,

        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,

        /// Root of the host WP-CLI installation
        #[arg(long, env = "WP_CLI_ROOT", value_name = "DIR")]
        host_root: Option<PathBuf>,
    },

    /// Generate shell completions
    ///
    /// Examples:
    ///   scaffold completions bash > ~/.local/share/bash-completion/completions/scaffold
    ///   scaffold completions zsh > ~/.zfunc/_scaffold
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
