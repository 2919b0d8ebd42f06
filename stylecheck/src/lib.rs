// stylecheck/src/lib.rs
//! # Stylecheck CLI Application
//!
//! This crate provides the command-line surface around `stylecheck-core`:
//! file discovery, the diagnostics reporter, and the line-based checks that
//! consume sanitized sources.

pub mod checks;
pub mod cli;
pub mod commands;
pub mod diagnostics;
pub mod discovery;
pub mod logger;
