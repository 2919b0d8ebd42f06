// stylecheck-core/src/lib.rs
//! # Stylecheck Core Library
//!
//! `stylecheck-core` provides the lexical sanitizer that runs ahead of every
//! style rule: string literals, character literals, comments, and `#define`
//! bodies are erased from the source text while the original line numbering
//! is preserved exactly, so a rule can never misfire on text that merely
//! looks like code inside a string or comment, and every diagnostic it
//! produces still points at the real source line.
//!
//! The library is pure and stateless: it performs no I/O and retains nothing
//! between invocations. Each file's sanitization is independent, so callers
//! may process files in parallel without coordination.
//!
//! ## Modules
//!
//! * `elide`: The region-eliding primitive shared by every pass — find a
//!   region, replace it with a marker while keeping the line-break count.
//! * `passes`: The explicit scanners for string/char literals, comments, and
//!   macro bodies.
//! * `sanitizer`: Composes the passes in their fixed order and exposes the
//!   raw/clean text pair with matching line views.
//! * `config`: Include/exclude filter pattern lists for file discovery,
//!   compiled once per run.
//! * `errors`: The structured error type for the library.
//!
//! ## Usage Example
//!
//! ```rust
//! use stylecheck_core::sanitize;
//!
//! let source = sanitize("int x; // comment\nconst char *s = \"/* not a comment */\";\n");
//! assert_eq!(source.raw_lines().len(), source.clean_lines().len());
//! assert!(!source.clean().contains("comment"));
//! ```
//!
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod elide;
pub mod errors;
pub mod passes;
pub mod sanitizer;

pub use config::{CompiledFilters, FilterConfig};
pub use elide::{elide_regions, Region, RegionMatcher};
pub use errors::StylecheckError;
pub use sanitizer::{sanitize, SourceText};
