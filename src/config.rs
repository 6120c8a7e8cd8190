// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::{self, BackupFormat, Mode};
pub use invoice_purge_engine::config::{
    Config, ConfigBuilder, InvoicePattern, LocateOptions, LocateOptionsBuilder,
};
use invoice_purge_engine::config::{DEFAULT_PATTERN, DEFAULT_SOURCE_DIR};
use invoice_purge_engine::options as engine_options;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from `--config`. Every key is optional; command-line
/// options take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub source_dir: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,
    pub pattern: Option<String>,
    pub mode: Option<Mode>,
    pub backup_format: Option<BackupFormat>,
    pub recursive: Option<bool>,
    pub hidden: Option<bool>,
}

impl FileConfig {
    /// Parse a config file; `.json` is read as JSON, anything else as YAML.
    ///
    /// # Errors
    ///
    /// `ConfigRead` if the file cannot be read, `ConfigParse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parsed = if is_json {
            serde_json::from_str(&text).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(&text).map_err(|e| e.to_string())
        };
        parsed.map_err(|message| AppError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }
}

/// Merge command-line options over the config file over built-in defaults.
///
/// # Errors
///
/// Fails when the config file cannot be loaded or the pattern is not a valid glob.
pub fn resolve(args: &Args) -> Result<Config> {
    let file = match &args.behavior.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    merge(args, file)
}

fn merge(args: &Args, file: FileConfig) -> Result<Config> {
    let format: engine_options::BackupFormat = args
        .backup
        .backup_format
        .or(file.backup_format)
        .unwrap_or(BackupFormat::Verbatim)
        .into();
    let mode: engine_options::Mode = args.backup.mode.or(file.mode).unwrap_or(Mode::CopyThenDelete).into();

    let source_dir = args
        .input
        .source
        .clone()
        .or(file.source_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR));
    // text 形式の既定の出力先は ./backup_txt
    let dest_dir = args
        .backup
        .dest
        .clone()
        .or(file.dest_dir)
        .unwrap_or_else(|| PathBuf::from(format.default_dest_dir()));

    let pattern_text = args
        .input
        .pattern
        .clone()
        .or(file.pattern)
        .unwrap_or_else(|| DEFAULT_PATTERN.to_string());
    let pattern = InvoicePattern::new(&pattern_text)?;

    let recursive = args.input.recursive || file.recursive.unwrap_or(false);
    let locate = LocateOptionsBuilder::default()
        .max_depth(if recursive { None } else { Some(1) })
        .hidden(args.input.hidden || file.hidden.unwrap_or(false))
        .follow_links(args.input.follow)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    ConfigBuilder::default()
        .source_dir(source_dir)
        .dest_dir(dest_dir)
        .pattern(pattern)
        .mode(mode)
        .format(format)
        .locate(locate)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::Mode, engine_options::Mode, Copy, Delete, CopyThenDelete);
map_enum!(options::BackupFormat, engine_options::BackupFormat, Verbatim, Text);
