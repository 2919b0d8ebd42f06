// stylecheck/src/main.rs
//! Stylecheck entry point.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use stylecheck::cli::{Cli, Commands};
use stylecheck::commands::check::run_check;
use stylecheck::commands::sanitize::run_sanitize;
use stylecheck::diagnostics::Reporter;
use stylecheck::logger;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match &args.command {
        Commands::Sanitize(cmd) => {
            run_sanitize(cmd)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(cmd) => {
            let reporter = Reporter::new();
            let warnings = run_check(cmd, &reporter)?;
            eprintln!("{} warning(s)", warnings);
            if warnings == 0 {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
