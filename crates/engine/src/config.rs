use crate::error::{EngineError, Result};
use crate::options::{BackupFormat, Mode};
use derive_builder::Builder;
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_DIR: &str = "./invoices";
pub const DEFAULT_PATTERN: &str = "*.json";

/// File-name glob selecting invoice files.
#[derive(Debug, Clone)]
pub struct InvoicePattern {
    original: String,
    matcher: GlobMatcher,
}

impl InvoicePattern {
    /// Compile a glob such as `*.json`.
    ///
    /// # Errors
    /// Returns `EngineError::Pattern` if the glob is malformed.
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = Glob::new(pattern).map_err(|source| EngineError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            original: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// Matches against a bare file name, never the full path. Names that are
    /// not valid UTF-8 are matched on their raw bytes.
    pub fn matches(&self, file_name: impl AsRef<Path>) -> bool {
        self.matcher.is_match(file_name)
    }

    pub fn pattern(&self) -> &str {
        &self.original
    }
}

impl Default for InvoicePattern {
    fn default() -> Self {
        // 固定パターンなのでコンパイル失敗はあり得ない
        let matcher = Glob::new(DEFAULT_PATTERN)
            .expect("default pattern is a valid glob")
            .compile_matcher();
        Self {
            original: DEFAULT_PATTERN.to_string(),
            matcher,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct LocateOptions {
    /// `Some(1)` lists only the direct entries of the source directory.
    #[builder(default = "Some(1)")]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(1),
            hidden: false,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_SOURCE_DIR)")]
    pub source_dir: PathBuf,
    #[builder(default = "PathBuf::from(BackupFormat::Verbatim.default_dest_dir())")]
    pub dest_dir: PathBuf,
    #[builder(default)]
    pub pattern: InvoicePattern,
    #[builder(default)]
    pub mode: Mode,
    #[builder(default)]
    pub format: BackupFormat,
    #[builder(default)]
    pub locate: LocateOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            dest_dir: PathBuf::from(BackupFormat::Verbatim.default_dest_dir()),
            pattern: InvoicePattern::default(),
            mode: Mode::default(),
            format: BackupFormat::default(),
            locate: LocateOptions::default(),
        }
    }
}
