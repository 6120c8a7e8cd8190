// tests/common/helpers.rs
//! Test helper functions to reduce unwrap() calls and provide better error messages.

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// The binary under test, running inside `dir`.
pub fn purge_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_invoice_purge"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Sorted file names directly inside `dir` (empty if it does not exist).
///
/// # Panics
///
/// Panics with a descriptive message if the directory cannot be read.
pub fn file_names(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {:?}: {}", dir, e))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Read a file as a string.
///
/// # Panics
///
/// Panics with a descriptive message if the file cannot be read.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// Parse stdout of a JSON-format run.
///
/// # Panics
///
/// Panics if the output is not JSON.
pub fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", String::from_utf8_lossy(output)))
}
