use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a run does with each located invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Back up only; originals stay in place.
    Copy,
    /// Remove originals without a backup.
    Delete,
    /// Back up, then remove every original whose backup succeeded.
    #[default]
    CopyThenDelete,
}

impl Mode {
    #[must_use]
    pub const fn copies(self) -> bool {
        matches!(self, Self::Copy | Self::CopyThenDelete)
    }

    #[must_use]
    pub const fn deletes(self) -> bool {
        matches!(self, Self::Delete | Self::CopyThenDelete)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "copy" => Ok(Self::Copy),
            "delete" => Ok(Self::Delete),
            "copy_then_delete" => Ok(Self::CopyThenDelete),
            other => Err(format!("Unknown mode: {other}")),
        }
    }
}

/// How a backup copy is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFormat {
    /// Byte-for-byte copy keeping permissions and timestamps.
    #[default]
    Verbatim,
    /// Content read as UTF-8 text and rewritten under a `.txt` extension.
    Text,
}

impl BackupFormat {
    /// Backup directory used when none is configured.
    #[must_use]
    pub const fn default_dest_dir(self) -> &'static str {
        match self {
            Self::Verbatim => "./downloaded_invoices",
            Self::Text => "./backup_txt",
        }
    }
}
