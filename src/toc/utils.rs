//! Shared utility functions for tree scanning

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

/// List the names of the immediate subdirectories of `path`, sorted by file
/// name. Returns `None` when the directory cannot be listed (the caller
/// treats that branch as empty). Plain files are dropped here; symlinks are
/// not followed.
pub fn list_subdirs(path: &Path) -> Option<Vec<String>> {
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(_) => return None,
    };

    let mut dirs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .collect();
    dirs.sort_by_key(|e| e.file_name());

    Some(
        dirs.into_iter()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect(),
    )
}

/// Check if a directory name matches any ignore pattern.
pub fn should_ignore_name(name: &str, ignore_patterns: &[String]) -> bool {
    ignore_patterns
        .iter()
        .any(|pattern| name == pattern || glob_match(pattern, name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Express `path` relative to `base` when `base` is a prefix of it.
/// A leading `./` on either side is normalized away so `./doc/x` rebases
/// onto `doc` as well as `./doc`. Paths outside `base` pass through
/// unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = path.strip_prefix(".").unwrap_or(path);
    let base = base.strip_prefix(".").unwrap_or(base);
    path.strip_prefix(base).unwrap_or(path).to_path_buf()
}
