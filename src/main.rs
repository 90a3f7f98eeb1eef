//! pyupdate - upgrade Python project dependencies with uv

use clap::Parser;
use colored::Colorize;
use pyupdate::cli::CliArgs;
use pyupdate::orchestrator::Orchestrator;
use pyupdate::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    let plan = args.plan();

    if args.verbose {
        eprintln!("pyupdate v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", plan.directory.display());
    }

    let orchestrator = Orchestrator::system(plan);
    let report = match orchestrator.run_with_progress(output_config.show_progress()) {
        Ok(report) => report,
        Err(e) => {
            if e.requires_recovery() {
                eprintln!(
                    "{}",
                    "pyproject.toml and uv.lock may be partially updated; \
                     restore them from version control before retrying."
                        .yellow()
                );
            }
            return Err(e.into());
        }
    };

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
