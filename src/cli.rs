//! CLI argument parsing module for pyupdate

use crate::domain::{UpdatePlan, DEFAULT_PROGRAM};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Upgrade pyproject.toml dependencies to their latest versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pyupdate",
    version,
    about = "A tool to update Python packages",
    long_about = "pyupdate removes the dependencies declared in pyproject.toml, re-adds them \
                  with uv at their latest versions and regenerates uv.lock."
)]
pub struct CliArgs {
    /// Path to directory containing pyproject.toml
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Save exact versions of updated packages
    #[arg(
        short,
        long,
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        action = ArgAction::Set,
        value_name = "BOOL"
    )]
    pub save_exact: bool,

    /// uv executable to run
    #[arg(long = "uv", value_name = "PROGRAM", default_value = DEFAULT_PROGRAM)]
    pub program: String,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Build the run configuration from the arguments
    pub fn plan(&self) -> UpdatePlan {
        UpdatePlan::new(&self.directory, self.save_exact).with_program(&self.program)
    }

    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "pyupdate=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
