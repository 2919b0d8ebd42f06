// stylecheck/src/discovery.rs
//! File discovery: recursive directory walks feeding the checker.
//!
//! Two operations with deliberately different symlink behavior: the
//! filtered walk never follows directory symlinks, while target expansion
//! does.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use stylecheck_core::CompiledFilters;

/// Walks `root` recursively and returns every file whose root-relative
/// path (separators normalized to `/`) passes the compiled filters.
/// Directory symlinks are not followed; symlinks to files are included.
/// The result is sorted for deterministic runs.
pub fn filter_files(root: &Path, filters: &CompiledFilters) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_filtered(root, root, filters, &mut files)?;
    files.sort();
    debug!("discovered {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

fn walk_filtered(
    root: &Path,
    dir: &Path,
    filters: &CompiledFilters,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to stat {}", path.display()))?;

        if file_type.is_dir() {
            walk_filtered(root, &path, filters, files)?;
        } else if path.is_file() {
            // is_file() resolves file symlinks; a symlink to a directory is
            // neither descended into nor listed.
            let rel = relative_slash_path(root, &path);
            if filters.matches(&rel) {
                files.push(path);
            }
        }
    }
    Ok(())
}

/// Expands a list of targets: directories are walked recursively following
/// symlinks, plain files are taken as-is. No filtering is applied; every
/// returned path is absolute.
pub fn expand_targets(targets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for target in targets {
        if target.is_dir() {
            walk_all(target, &mut files)?;
        } else {
            files.push(absolute(target)?);
        }
    }
    files.sort();
    debug!("expanded {} target(s) into {} file(s)", targets.len(), files.len());
    Ok(files)
}

fn walk_all(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
        let path = entry.path();
        if path.is_dir() {
            walk_all(&path, files)?;
        } else {
            files.push(absolute(&path)?);
        }
    }
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        Ok(cwd.join(path))
    }
}

/// The path of `path` relative to `root`, joined with `/` regardless of the
/// platform separator.
fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<String>>()
        .join("/")
}
