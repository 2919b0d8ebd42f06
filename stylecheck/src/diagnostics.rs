// stylecheck/src/diagnostics.rs
//! Warning reporting in the two formats build tools pick up.
//!
//! Every warning is printed twice to stderr: once in MSVC format so IDEs
//! and msbuild surface it, once in GCC format so compiler-oriented tooling
//! does. The counter lives on the reporter rather than in a process global,
//! so parallel runs and concurrent tests cannot contaminate each other.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Collects and prints style warnings.
#[derive(Debug, Default)]
pub struct Reporter {
    warnings: AtomicUsize,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits one warning to stderr in both formats and counts it.
    ///
    /// `line_number` is 1-based; the sanitizer guarantees that clean-line
    /// indices map one-to-one onto raw-line indices, so a warning detected
    /// on sanitized text can be reported here with the raw line as
    /// `line_content`.
    pub fn report_warning(
        &self,
        rule: &str,
        filename: &str,
        line_number: usize,
        description: &str,
        line_content: Option<&str>,
    ) {
        match line_content {
            Some(content) => {
                // msvc / msbuild format
                eprintln!(
                    "{}({}): warning STY9999: {}: {} [{}]",
                    filename, line_number, description, content, rule
                );
                // gcc format
                eprintln!(
                    "{}:{}: warning: {}: {} [{}]",
                    filename, line_number, description, content, rule
                );
            }
            None => {
                eprintln!(
                    "{}({}): warning STY9999: {} [{}]",
                    filename, line_number, description, rule
                );
                eprintln!(
                    "{}:{}: warning: {} [{}]",
                    filename, line_number, description, rule
                );
            }
        }
        eprintln!();

        self.warnings.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of warnings reported so far.
    pub fn warning_count(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }
}
