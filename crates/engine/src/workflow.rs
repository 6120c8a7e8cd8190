// crates/engine/src/workflow.rs
use crate::error::{EngineError, Result};
use crate::naming;
use crate::options::{BackupFormat, Mode};
use crate::report::{BatchReport, CopyRecord};
use filetime::FileTime;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where and how one batch is processed.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    pub dest_dir: PathBuf,
    pub mode: Mode,
    pub format: BackupFormat,
}

/// Back up and/or delete every file in `paths`.
///
/// Each file is handled independently: a failed copy or delete is recorded in
/// the report and the batch moves on. When the plan both copies and deletes,
/// an original whose backup failed is kept and listed as skipped.
///
/// # Errors
///
/// Returns an error only when the backup directory cannot be created.
pub fn process_batch(paths: &[PathBuf], plan: &BatchPlan) -> Result<BatchReport> {
    let mut report = BatchReport {
        located: paths.len(),
        ..BatchReport::default()
    };
    let mut not_backed_up = HashSet::new();

    if plan.mode.copies() {
        fs::create_dir_all(&plan.dest_dir).map_err(|source| EngineError::CreateDir {
            path: plan.dest_dir.clone(),
            source,
        })?;

        for path in paths {
            match backup_file(path, &plan.dest_dir, plan.format) {
                Ok(destination) => {
                    log::info!("copied {} -> {}", path.display(), destination.display());
                    report.copied.push(CopyRecord {
                        source: path.clone(),
                        destination,
                    });
                }
                Err(e) => {
                    log::warn!("{e}");
                    not_backed_up.insert(path.as_path());
                    report.failures.push((path.clone(), e));
                }
            }
        }
    }

    if plan.mode.deletes() {
        for path in paths {
            if not_backed_up.contains(path.as_path()) {
                log::warn!("keeping {}: no backup was made", path.display());
                report.skipped.push(path.clone());
                continue;
            }
            match delete_file(path) {
                Ok(()) => {
                    log::info!("deleted {}", path.display());
                    report.deleted.push(path.clone());
                }
                Err(e) => {
                    log::warn!("{e}");
                    report.failures.push((path.clone(), e));
                }
            }
        }
    }

    Ok(report)
}

/// Copy `source` into `dest_dir` under a collision-safe name.
///
/// Returns the path of the new backup.
///
/// # Errors
///
/// `EngineError::Copy` for I/O failures, `EngineError::NotText` when a text
/// backup is requested for content that is not UTF-8.
pub fn backup_file(source: &Path, dest_dir: &Path, format: BackupFormat) -> Result<PathBuf> {
    let copy_err = |source_err: io::Error| EngineError::Copy {
        path: source.to_path_buf(),
        source: source_err,
    };

    let file_name = source
        .file_name()
        .ok_or_else(|| copy_err(io::Error::new(io::ErrorKind::InvalidInput, "path has no file name")))?;

    match format {
        BackupFormat::Verbatim => {
            let mut input = File::open(source).map_err(copy_err)?;
            let meta = input.metadata().map_err(copy_err)?;
            let (dest, mut output) = naming::create_unique(dest_dir, file_name).map_err(copy_err)?;

            let written = io::copy(&mut input, &mut output)
                .and_then(|_| output.flush())
                .and_then(|()| output.set_permissions(meta.permissions()))
                .and_then(|()| {
                    let atime = FileTime::from_last_access_time(&meta);
                    let mtime = FileTime::from_last_modification_time(&meta);
                    filetime::set_file_handle_times(&output, Some(atime), Some(mtime))
                });
            if let Err(e) = written {
                discard_partial(&dest);
                return Err(copy_err(e));
            }
            Ok(dest)
        }
        BackupFormat::Text => {
            let text = fs::read_to_string(source).map_err(|e| {
                if e.kind() == io::ErrorKind::InvalidData {
                    EngineError::NotText(source.to_path_buf())
                } else {
                    copy_err(e)
                }
            })?;
            let mut txt_name = Path::new(file_name).file_stem().unwrap_or(file_name).to_os_string();
            txt_name.push(".txt");
            let (dest, mut output) = naming::create_unique(dest_dir, &txt_name).map_err(copy_err)?;

            if let Err(e) = output.write_all(text.as_bytes()).and_then(|()| output.flush()) {
                discard_partial(&dest);
                return Err(copy_err(e));
            }
            Ok(dest)
        }
    }
}

/// Remove one original.
///
/// # Errors
///
/// `EngineError::Delete` carrying the path and the OS error.
pub fn delete_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| EngineError::Delete {
        path: path.to_path_buf(),
        source,
    })
}

fn discard_partial(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        log::warn!("could not remove partial backup {}: {e}", path.display());
    }
}
