// stylecheck-core/src/config.rs
//! Include/exclude filter configuration for file discovery.
//!
//! Patterns are regular expressions matched (unanchored) against each
//! file's root-relative path with `/` separators. The lists are compiled
//! once per discovery run into [`CompiledFilters`]; compilation failures
//! are collected and reported together rather than one at a time.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::StylecheckError;

/// Include/exclude pattern lists for selecting files under a root
/// directory. A file is selected iff at least one include pattern matches
/// its relative path and no exclude pattern does.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        // Match everything, exclude nothing.
        Self {
            include: vec![String::from(".*")],
            exclude: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Loads a filter configuration from a YAML file with `include:` and
    /// `exclude:` lists. Missing lists fall back to the defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read filter config file: {}", path.display()))?;
        let config: FilterConfig = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse filter config file: {}", path.display()))?;
        debug!(
            "loaded filter config from {}: {} include, {} exclude pattern(s)",
            path.display(),
            config.include.len(),
            config.exclude.len()
        );
        Ok(config)
    }

    /// Compiles every pattern, collecting all failures into a single error
    /// so a bad config is reported in full on the first run.
    pub fn compile(&self) -> Result<CompiledFilters, StylecheckError> {
        let mut errors = Vec::new();
        let include = compile_patterns(&self.include, &mut errors);
        let exclude = compile_patterns(&self.exclude, &mut errors);

        if !errors.is_empty() {
            let report = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            return Err(StylecheckError::Fatal(format!(
                "Failed to compile {} filter pattern(s):\n{}",
                errors.len(),
                report
            )));
        }

        debug!(
            "compiled {} include and {} exclude pattern(s)",
            include.len(),
            exclude.len()
        );
        Ok(CompiledFilters { include, exclude })
    }
}

fn compile_patterns(patterns: &[String], errors: &mut Vec<StylecheckError>) -> Vec<Regex> {
    let mut compiled = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        match Regex::new(pattern) {
            Ok(regex) => compiled.push(regex),
            Err(e) => {
                errors.push(StylecheckError::PatternCompilationError(pattern.clone(), e))
            }
        }
    }
    compiled
}

/// Precompiled filter patterns, built once per discovery run.
#[derive(Debug)]
pub struct CompiledFilters {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl CompiledFilters {
    /// True iff at least one include pattern matches `rel_path` and no
    /// exclude pattern matches it.
    pub fn matches(&self, rel_path: &str) -> bool {
        self.include.iter().any(|re| re.is_match(rel_path))
            && !self.exclude.iter().any(|re| re.is_match(rel_path))
    }
}
