//! errors.rs - Custom error types for the stylecheck-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `stylecheck-core`
/// library.
///
/// The sanitizer itself cannot fail by contract (malformed or unterminated
/// regions are a defined no-op), so these variants cover the configuration
/// side: filter pattern compilation and file access.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StylecheckError {
    #[error("Failed to compile filter pattern '{0}': {1}")]
    PatternCompilationError(String, regex::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
