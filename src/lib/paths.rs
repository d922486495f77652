//! Shared helpers reused across modules (e.g., path resolution).

use std::path::{Path, PathBuf};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Resolve `path` against the directory containing `anchor_file` unless it is already absolute.
pub fn resolve_relative_to(anchor_file: &Path, path: &Path) -> PathBuf {
    if is_nonempty_absolute(path) {
        return path.to_path_buf();
    }
    match anchor_file.parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}
