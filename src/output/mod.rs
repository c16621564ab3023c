//! ToC rendering
//!
//! This module turns the `TocNode` forest into output:
//!
//! - `markdown` - the nested bullet list document (default)
//! - `json` - pretty-printed JSON for programmatic consumers

mod json;
mod markdown;

// Re-export public types and functions
pub use json::print_json;
pub use markdown::{TOC_HEADER, print_markdown, render_document, render_lines};
