//! Shared test utilities.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory for filesystem tests.
///
/// # Panics
///
/// Panics if the temporary directory cannot be created.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"))
}

/// UTF-8 view of a temporary directory's root path.
///
/// # Panics
///
/// Panics if the path is not valid UTF-8.
pub fn utf8_root(temp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .unwrap_or_else(|path| panic!("temporary path should be UTF-8: {}", path.display()))
}
