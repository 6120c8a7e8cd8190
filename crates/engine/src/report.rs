use crate::error::EngineError;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::PathBuf;

/// A located invoice, as shown by the list view.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mtime: Option<DateTime<Local>>,
}

impl InvoiceFile {
    pub fn from_metadata(path: PathBuf, meta: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            size: meta.len(),
            mtime: meta.modified().ok().map(DateTime::<Local>::from),
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Outcome of one batch, one entry per file and step.
///
/// Failures never stop the batch, so a report can carry copies, deletions and
/// failures for the same run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub located: usize,
    pub copied: Vec<CopyRecord>,
    pub deleted: Vec<PathBuf>,
    /// Originals kept because their backup failed.
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, EngineError)>,
}

impl BatchReport {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
