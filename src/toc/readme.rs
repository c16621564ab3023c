//! README containment predicate
//!
//! A directory belongs in the table of contents only when its subtree holds a
//! `README.md`. The check walks the whole subtree, so results are memoized
//! for the duration of one invocation.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// The file name that qualifies a subtree for the table of contents.
pub const README_FILE: &str = "README.md";

/// The README path for `dir` when the directory itself owns one.
pub fn owned_readme(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(README_FILE);
    candidate.is_file().then_some(candidate)
}

/// Memoized containment predicate over one invocation.
///
/// Inaccessible branches count as README-free: a directory the walk cannot
/// read contributes nothing, and the predicate itself never errors.
pub struct ReadmeIndex {
    cache: HashMap<PathBuf, bool>,
}

impl ReadmeIndex {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Check whether `dir` or any directory beneath it contains `README.md`.
    pub fn has_readme(&mut self, dir: &Path) -> bool {
        if let Some(&hit) = self.cache.get(dir) {
            return hit;
        }
        let found = self.scan(dir);
        self.cache.insert(dir.to_path_buf(), found);
        found
    }

    /// Walk the subtree looking for a README, with every ignore-file and
    /// hidden-entry filter disabled so the scan sees the tree as-is.
    fn scan(&mut self, dir: &Path) -> bool {
        let walk = WalkBuilder::new(dir)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .build();

        let mut visited_dirs = Vec::new();
        for entry in walk.flatten() {
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                visited_dirs.push(entry.into_path());
                continue;
            }
            if entry.file_name() == OsStr::new(README_FILE)
                && entry.file_type().is_some_and(|t| t.is_file())
            {
                if let Some(parent) = entry.path().parent() {
                    self.mark_ancestors(parent, dir);
                }
                return true;
            }
        }

        // No README anywhere beneath `dir`: every directory the walk reached
        // shares that answer.
        for visited in visited_dirs {
            self.cache.insert(visited, false);
        }
        false
    }

    /// A README under `from` proves containment for every ancestor up to and
    /// including the scanned root.
    fn mark_ancestors(&mut self, from: &Path, root: &Path) {
        for dir in from.ancestors() {
            self.cache.insert(dir.to_path_buf(), true);
            if dir == root {
                break;
            }
        }
    }
}

impl Default for ReadmeIndex {
    fn default() -> Self {
        Self::new()
    }
}
