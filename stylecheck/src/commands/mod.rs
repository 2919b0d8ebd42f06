// stylecheck/src/commands/mod.rs
//! Per-command runner functions.

pub mod check;
pub mod sanitize;
