//! TocWalker - recursive descent over the documentation tree

use std::path::Path;

use super::config::WalkerConfig;
use super::node::TocNode;
use super::readme::{ReadmeIndex, owned_readme};
use super::utils::{list_subdirs, relative_to, should_ignore_name};

/// Walks a documentation root and builds the `TocNode` forest.
///
/// The root itself never becomes a node; only its qualifying descendants do.
/// Siblings are visited in sorted order and children hang directly under
/// their parent, so a pre-order render of the forest reproduces the
/// depth-first traversal.
pub struct TocWalker {
    config: WalkerConfig,
    index: ReadmeIndex,
}

impl TocWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            index: ReadmeIndex::new(),
        }
    }

    pub fn walk(&mut self, root: &Path) -> Vec<TocNode> {
        self.walk_dir(root)
    }

    fn walk_dir(&mut self, path: &Path) -> Vec<TocNode> {
        let mut nodes = Vec::new();

        // A listing that fails (access restriction) yields an empty branch,
        // never an error.
        let Some(subdirs) = list_subdirs(path) else {
            return nodes;
        };

        for name in subdirs {
            if should_ignore_name(&name, &self.config.ignore_patterns) {
                continue;
            }

            let dir_path = path.join(&name);
            if !self.index.has_readme(&dir_path) {
                continue;
            }

            let readme =
                owned_readme(&dir_path).map(|p| relative_to(&p, &self.config.link_base));
            let children = self.walk_dir(&dir_path);
            nodes.push(TocNode {
                name,
                path: dir_path,
                readme,
                children,
            });
        }

        nodes
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn walk(root: &Path) -> Vec<TocNode> {
        let config = WalkerConfig {
            link_base: root.to_path_buf(),
            ignore_patterns: Vec::new(),
        };
        TocWalker::new(config).walk(root)
    }

    #[test]
    fn test_directories_without_readme_are_skipped() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("with")).unwrap();
        fs::write(dir.path().join("with").join("README.md"), "# with").unwrap();
        fs::create_dir(dir.path().join("without")).unwrap();

        let nodes = walk(dir.path());
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "with");
    }

    #[test]
    fn test_siblings_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["zoo", "api", "midway"] {
            let sub = dir.path().join(name);
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join("README.md"), "#").unwrap();
        }

        let nodes = walk(dir.path());
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["api", "midway", "zoo"]);
    }

    #[test]
    fn test_parent_without_own_readme_has_no_link() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("outer").join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("README.md"), "# inner").unwrap();

        let nodes = walk(dir.path());
        assert_eq!(nodes.len(), 1);
        let outer = &nodes[0];
        assert_eq!(outer.name, "outer");
        assert!(!outer.has_link());
        assert_eq!(outer.children.len(), 1);
        let inner = &outer.children[0];
        assert_eq!(inner.name, "inner");
        assert_eq!(
            inner.readme,
            Some(PathBuf::from("outer/inner/README.md"))
        );
    }

    #[test]
    fn test_plain_files_never_become_nodes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "# root-owned").unwrap();
        fs::write(dir.path().join("notes.md"), "loose file").unwrap();

        // Only directories are considered; files at the root are invisible.
        assert!(walk(dir.path()).is_empty());
    }

    #[test]
    fn test_ignore_patterns_prune_directories() {
        let dir = TempDir::new().unwrap();
        for name in ["keep", "drop"] {
            let sub = dir.path().join(name);
            fs::create_dir(&sub).unwrap();
            fs::write(sub.join("README.md"), "#").unwrap();
        }

        let config = WalkerConfig {
            link_base: dir.path().to_path_buf(),
            ignore_patterns: vec!["drop".to_string()],
        };
        let nodes = TocWalker::new(config).walk(dir.path());
        let names: Vec<_> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["keep"]);
    }

    #[test]
    fn test_missing_root_yields_empty_forest() {
        let dir = TempDir::new().unwrap();
        assert!(walk(&dir.path().join("absent")).is_empty());
    }
}
