//! Enumerated output filenames.
//!
//! Output files are named `{prefix}{N}.{ext}` with N the lowest positive
//! integer not already taken in the target directory.

use std::path::{Path, PathBuf};

/// Normalizes an extension to always carry a leading dot.
fn dotted(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{extension}")
    }
}

/// Returns the first `dir/{prefix}{N}.{extension}` that does not exist,
/// probing N = 1, 2, 3, … in order.
///
/// The probe checks existence only; the later write is a separate step, so
/// a concurrent writer could take the name in between. That race is
/// accepted for a single-user, single-invocation tool. Should the counter
/// ever overflow, the last computed candidate is returned regardless of
/// existence.
pub fn next_available_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    let ext = dotted(extension);
    let mut counter: u64 = 1;

    loop {
        let path = dir.join(format!("{prefix}{counter}{ext}"));
        if !path.exists() {
            return path;
        }
        counter = match counter.checked_add(1) {
            Some(next) => next,
            None => return path,
        };
    }
}
