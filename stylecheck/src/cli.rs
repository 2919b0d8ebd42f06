// stylecheck/src/cli.rs
//! This file defines the command-line interface (CLI) for the stylecheck
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "stylecheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Line-preserving lexical sanitizer and style checker for C/C++ sources",
    long_about = "Stylecheck erases string literals, character literals, comments, and #define bodies from C/C++-like sources while keeping the original line numbering intact, then runs line-based style checks over the sanitized text so that rules never misfire on code-looking text inside strings or comments.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `stylecheck` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes a source file or stdin: literals, comments, and macro bodies erased, line numbering intact.
    #[command(about = "Sanitizes a source file or stdin, erasing literals, comments, and macro bodies.")]
    Sanitize(SanitizeCommand),

    /// Discovers source files, sanitizes each one, and runs the style checks.
    #[command(about = "Discovers source files, sanitizes each one, and runs the style checks.")]
    Check(CheckCommand),
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Files or directories to check (directories are walked recursively, following symlinks).
    #[arg(value_name = "TARGET", conflicts_with = "root")]
    pub targets: Vec<PathBuf>,

    /// Walk this root directory and select files with include/exclude patterns instead of listing targets.
    #[arg(long, value_name = "DIR", help = "Walk this root directory, selecting files via include/exclude patterns.")]
    pub root: Option<PathBuf>,

    /// Path to a YAML file with `include:` and `exclude:` pattern lists.
    #[arg(long = "filter-config", value_name = "FILE", requires = "root")]
    pub filter_config: Option<PathBuf>,

    /// Include pattern: a regex matched against the root-relative path. Repeatable.
    #[arg(long, value_name = "PATTERN", requires = "root")]
    pub include: Vec<String>,

    /// Exclude pattern: a regex matched against the root-relative path. Repeatable.
    #[arg(long, value_name = "PATTERN", requires = "root")]
    pub exclude: Vec<String>,
}
