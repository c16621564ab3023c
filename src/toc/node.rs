//! Serializable ToC node tree

use std::path::PathBuf;

use serde::Serialize;

/// One qualifying directory in the table of contents.
///
/// A directory qualifies when it or any descendant contains `README.md`.
/// `readme` is set only when the directory itself owns the file, and holds
/// the link target already rebased onto the configured link base.
#[derive(Debug, Clone, Serialize)]
pub struct TocNode {
    pub name: String,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<PathBuf>,
    pub children: Vec<TocNode>,
}

impl TocNode {
    /// Whether this entry renders as a markdown link.
    pub fn has_link(&self) -> bool {
        self.readme.is_some()
    }
}
