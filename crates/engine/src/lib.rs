// crates/engine/src/lib.rs
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod locator;
pub mod naming;
pub mod options;
pub mod path_security;
pub mod report;
pub mod workflow;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::{BatchReport, InvoiceFile};
use crate::workflow::BatchPlan;

/// Locate the invoices described by `config` and back up and/or delete them.
///
/// Per-file failures are collected in `BatchReport::failures`; the batch
/// always runs over every located file.
///
/// # Errors
///
/// - `SourceMissing` / `NoMatches` when there is nothing to do (no file is touched)
/// - `Config` for an invalid directory pair (copying modes only)
/// - `CreateDir` if the backup directory cannot be created
pub fn run(config: &Config) -> Result<BatchReport> {
    // 削除のみのときは出力先を使わない
    if config.mode.copies() {
        let recursive = config.locate.max_depth != Some(1);
        path_security::validate_dirs(&config.source_dir, &config.dest_dir, recursive)?;
    }
    let files = located(config)?;
    let plan = BatchPlan {
        dest_dir: config.dest_dir.clone(),
        mode: config.mode,
        format: config.format,
    };
    workflow::process_batch(&files, &plan)
}

/// List the invoices described by `config` without touching them.
///
/// # Errors
///
/// `SourceMissing` / `NoMatches` as in [`run`]. The backup directory is
/// never consulted.
pub fn list(config: &Config) -> Result<Vec<InvoiceFile>> {
    let files = located(config)?;
    Ok(locator::describe(&files))
}

fn located(config: &Config) -> Result<Vec<PathBuf>> {
    if !config.source_dir.is_dir() {
        return Err(EngineError::SourceMissing(config.source_dir.clone()));
    }

    let files = locator::locate(&config.source_dir, &config.pattern, &config.locate);
    if files.is_empty() {
        return Err(EngineError::NoMatches {
            dir: config.source_dir.clone(),
            pattern: config.pattern.pattern().to_string(),
        });
    }
    Ok(files)
}
