//! Eligible-file enumeration under a root directory.

use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

/// Collects the files under `root` whose extension equals `extension`.
///
/// Recursive mode walks the whole tree; non-recursive mode lists only the
/// root's immediate entries. Unreadable entries and non-UTF-8 paths are
/// logged and skipped rather than failing the run. Callers are expected to
/// have checked that `root` exists; a missing root simply yields no files.
#[must_use]
pub fn collect_eligible_files(root: &Utf8Path, recurse: bool, extension: &str) -> Vec<Utf8PathBuf> {
    let max_depth = if recurse { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for result in WalkDir::new(root).max_depth(max_depth) {
        let entry = match result {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!("skipping unreadable directory entry: {error}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(path) = Utf8PathBuf::from_path_buf(entry.into_path()) else {
            tracing::warn!("skipping non-UTF-8 path under {root}");
            continue;
        };
        if path.extension() == Some(extension) {
            files.push(path);
        }
    }

    files
}
