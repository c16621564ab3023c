//! Test utilities for building documentation trees in temporary directories.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary documentation tree for testing.
///
/// Provides methods for creating directories and README files. The tree is
/// automatically cleaned up when dropped.
pub struct DocTree {
    dir: TempDir,
}

impl DocTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory (and any missing parents) under the tree.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create `README.md` inside the given directory, creating the directory
    /// as needed.
    pub fn add_readme(&self, dir: &str) -> PathBuf {
        let dir_path = self.add_dir(dir);
        let readme = dir_path.join("README.md");
        fs::write(&readme, format!("# {}\n", dir)).expect("Failed to write README");
        readme
    }

    /// Add an arbitrary file under the tree, creating parent directories as
    /// needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Default for DocTree {
    fn default() -> Self {
        Self::new()
    }
}
