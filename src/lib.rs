//! mdtoc - Generate a nested markdown table of contents for a documentation tree

pub mod output;
pub mod toc;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use output::{TOC_HEADER, print_json, print_markdown, render_document};
pub use toc::{README_FILE, ReadmeIndex, TocNode, TocWalker, WalkerConfig};
