//! Command implementations for scaffold-cli

pub mod package;

use colored::Colorize;
use scaffold_fs::{MaterializeReport, WriteOutcome};

pub use package::{PackageOptions, run_package};
pub use package_tests::run_package_tests;

/// Print one line per file, then the summary for `what` ("package", "package test").
fn print_report(report: &MaterializeReport, what: &str) {
    for (path, outcome) in report.entries() {
        match outcome {
            WriteOutcome::Written => println!("   {} {}", "+".green(), path.display()),
            WriteOutcome::Skipped => {
                println!("   {} {}", "-".dimmed(), path.display().to_string().dimmed())
            }
        }
    }

    if report.any_written() {
        println!("{} Created {} files.", "Success:".green().bold(), what);
    } else {
        println!("All {} files were skipped.", what);
    }
}
