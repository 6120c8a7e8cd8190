// crates/engine/src/locator.rs
use crate::config::{InvoicePattern, LocateOptions};
use crate::report::InvoiceFile;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Enumerate the files under `source_dir` whose file name matches `pattern`.
///
/// A missing or empty directory yields an empty list; reporting that case is
/// left to the caller. Entries come back sorted by file name.
pub fn locate(source_dir: &Path, pattern: &InvoicePattern, options: &LocateOptions) -> Vec<PathBuf> {
    if !source_dir.is_dir() {
        return Vec::new();
    }

    let mut builder = WalkBuilder::new(source_dir);
    builder
        .standard_filters(false)
        .hidden(!options.hidden)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping unreadable entry in {}: {e}", source_dir.display());
                continue;
            }
        };

        // depth 0 はルートディレクトリ自身
        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if pattern.matches(entry.file_name()) {
            found.push(entry.into_path());
        }
    }

    log::debug!(
        "located {} file(s) matching '{}' in {}",
        found.len(),
        pattern.pattern(),
        source_dir.display()
    );
    found
}

/// Attach size and modification time to located paths.
///
/// Paths whose metadata can no longer be read are dropped with a warning.
pub fn describe(paths: &[PathBuf]) -> Vec<InvoiceFile> {
    paths
        .iter()
        .filter_map(|path| match std::fs::metadata(path) {
            Ok(meta) => Some(InvoiceFile::from_metadata(path.clone(), &meta)),
            Err(e) => {
                log::warn!("cannot stat {}: {e}", path.display());
                None
            }
        })
        .collect()
}
