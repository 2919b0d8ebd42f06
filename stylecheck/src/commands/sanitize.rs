// stylecheck/src/commands/sanitize.rs
//! `sanitize` command implementation: one file (or stdin) in, sanitized
//! text out. The output always has exactly as many lines as the input.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};

use stylecheck_core::sanitize;

use crate::cli::SanitizeCommand;

pub fn run_sanitize(cmd: &SanitizeCommand) -> Result<()> {
    let input = match &cmd.input_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            buffer
        }
    };

    let source = sanitize(&input);
    debug!("sanitized {} line(s)", source.raw_lines().len());

    match &cmd.output {
        Some(path) => {
            fs::write(path, source.clean())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Wrote sanitized output to {}", path.display());
        }
        None => {
            io::stdout()
                .write_all(source.clean().as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
