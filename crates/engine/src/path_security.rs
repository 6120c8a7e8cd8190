// crates/engine/src/path_security.rs
//! Sanity checks on the configured directories.
//!
//! # Rejected configurations
//!
//! - **Null bytes**: a path that cannot be handed to the OS intact
//! - **Self-backup**: a backup directory that is the source directory, so
//!   fresh copies would be swept up by the next run
//! - **Nested backup**: a backup directory below the source directory while
//!   the scan descends into subdirectories, for the same reason

use crate::error::{EngineError, Result};
use std::path::{Component, Path, PathBuf};

/// Validate the source/backup directory pair before any file is touched.
///
/// `recursive` is whether the locator descends below the source directory.
///
/// # Errors
///
/// Returns `EngineError::Config` if either path contains a null byte, both
/// resolve to the same directory, or a recursive scan would reach the backup
/// directory.
pub fn validate_dirs(source: &Path, dest: &Path, recursive: bool) -> Result<()> {
    for path in [source, dest] {
        if path.to_string_lossy().contains('\0') {
            return Err(EngineError::Config(format!(
                "Path contains null bytes: {}",
                path.display()
            )));
        }
    }

    let (resolved_source, resolved_dest) = (resolve(source), resolve(dest));
    if resolved_source == resolved_dest {
        return Err(EngineError::Config(format!(
            "Backup directory '{}' is the source directory",
            dest.display()
        )));
    }
    if recursive && resolved_dest.starts_with(&resolved_source) {
        return Err(EngineError::Config(format!(
            "Backup directory '{}' is inside the source directory '{}' and would be scanned recursively",
            dest.display(),
            source.display()
        )));
    }

    Ok(())
}

/// Absolute path with symlinks resolved as far as the path exists; the
/// missing tail is appended lexically.
fn resolve(path: &Path) -> PathBuf {
    let absolute = normalize(&std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()));
    let mut existing = absolute.as_path();
    let mut tail = Vec::new();
    loop {
        if let Ok(canonical) = existing.canonicalize() {
            return tail.iter().rev().fold(canonical, |acc, part| acc.join(part));
        }
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name);
                existing = parent;
            }
            _ => return absolute.clone(),
        }
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
