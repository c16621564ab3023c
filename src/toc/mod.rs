//! Documentation tree scanning
//!
//! This module decides which directories belong in the table of contents and
//! in what order:
//!
//! - `ReadmeIndex`: the containment predicate - does a subtree hold a README?
//! - `TocWalker`: recursive descent producing the `TocNode` forest

mod config;
mod node;
mod readme;
mod utils;
mod walker;

// Re-export public types
pub use config::WalkerConfig;
pub use node::TocNode;
pub use readme::{README_FILE, ReadmeIndex, owned_readme};
pub use utils::{glob_match, relative_to};
pub use walker::TocWalker;
