// stylecheck/src/commands/check.rs
//! `check` command implementation: discover files, sanitize each one, run
//! the style checks, and report warnings.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::path::Path;

use stylecheck_core::{sanitize, FilterConfig, SourceText};

use crate::checks;
use crate::cli::CheckCommand;
use crate::diagnostics::Reporter;
use crate::discovery::{expand_targets, filter_files};

/// Reads a file and runs it through the sanitizer.
///
/// I/O stays here: the sanitizer itself never touches the filesystem, so a
/// missing or unreadable file surfaces as a plain read error before any
/// sanitization happens.
pub fn read_source(path: &Path) -> Result<SourceText> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(sanitize(&contents))
}

/// Runs the whole check: returns the number of warnings reported.
pub fn run_check(cmd: &CheckCommand, reporter: &Reporter) -> Result<usize> {
    let files = if let Some(root) = &cmd.root {
        let mut config = match &cmd.filter_config {
            Some(path) => FilterConfig::load_from_file(path)?,
            // Explicit --include patterns replace the match-everything
            // default; --exclude alone narrows the default.
            None if cmd.include.is_empty() => FilterConfig::default(),
            None => FilterConfig {
                include: Vec::new(),
                exclude: Vec::new(),
            },
        };
        config.include.extend(cmd.include.iter().cloned());
        config.exclude.extend(cmd.exclude.iter().cloned());

        let filters = config.compile()?;
        filter_files(root, &filters)?
    } else {
        if cmd.targets.is_empty() {
            bail!("No targets given: pass files/directories, or use --root with patterns");
        }
        expand_targets(&cmd.targets)?
    };

    info!("Checking {} file(s)", files.len());
    for file in &files {
        let filename = file.display().to_string();
        let source = read_source(file)?;
        debug!("{}: {} line(s)", filename, source.raw_lines().len());
        checks::run_all_checks(&filename, &source, reporter);
    }

    Ok(reporter.warning_count())
}
