// crates/engine/src/naming.rs
//! Collision-safe file names for the backup directory.
//!
//! A desired name `name.ext` is used as-is when free; otherwise the probe
//! continues with `name(1).ext`, `name(2).ext`, ... until an unoccupied name
//! turns up. The probe is unbounded.

use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// The probe sequence for `desired`: the name itself, then numbered variants.
///
/// Works on OS strings, so a name that is not valid UTF-8 keeps its exact
/// bytes in every variant.
pub fn candidates(desired: &OsStr) -> impl Iterator<Item = OsString> + '_ {
    let (base, ext) = split_name(desired);
    std::iter::once(desired.to_os_string()).chain((1u64..).map(move |n| {
        let mut name = base.to_os_string();
        name.push(format!("({n})"));
        if let Some(ext) = ext {
            name.push(".");
            name.push(ext);
        }
        name
    }))
}

/// Return the first path in `dir` under which nothing exists yet.
///
/// Anything at a candidate path counts as occupied, including directories and
/// dangling symlinks.
pub fn allocate(dir: &Path, desired: impl AsRef<OsStr>) -> PathBuf {
    candidates(desired.as_ref())
        .map(|name| dir.join(name))
        .find(|path| !is_occupied(path))
        .unwrap_or_else(|| unreachable!("candidate sequence is infinite"))
}

/// Like [`allocate`], but claims the name by creating the file.
///
/// Each candidate is opened with `create_new`, so a file that appears between
/// probing and writing is skipped instead of overwritten.
///
/// # Errors
/// Any I/O error other than `AlreadyExists` ends the probe.
pub fn create_unique(dir: &Path, desired: impl AsRef<OsStr>) -> io::Result<(PathBuf, File)> {
    for name in candidates(desired.as_ref()) {
        let path = dir.join(name);
        if is_occupied(&path) {
            log::debug!("{} is taken", path.display());
            continue;
        }
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e),
        }
    }
    unreachable!("candidate sequence is infinite")
}

fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Split at the last dot; a leading dot belongs to the base (`.env` has no
/// extension).
fn split_name(name: &OsStr) -> (&OsStr, Option<&OsStr>) {
    let path = Path::new(name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), ext) => (stem, ext),
        (None, _) => (name, None),
    }
}
