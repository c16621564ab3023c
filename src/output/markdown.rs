//! Markdown output formatting
//!
//! Renders the ToC as a nested markdown bullet list, one line per qualifying
//! directory, indented two spaces per depth level.

use std::io;

use crate::toc::TocNode;

/// Header line of the generated document ("目录" is "Table of Contents").
pub const TOC_HEADER: &str = "# 目录";

/// Render the bullet lines in pre-order, two spaces of indent per level.
/// Children of the documentation root are depth 0 and carry no indent.
pub fn render_lines(nodes: &[TocNode]) -> Vec<String> {
    let mut lines = Vec::new();
    push_lines(nodes, 0, &mut lines);
    lines
}

fn push_lines(nodes: &[TocNode], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match &node.readme {
            Some(readme) => lines.push(format!(
                "{}- [{}]({})",
                indent,
                node.name,
                readme.display()
            )),
            None => lines.push(format!("{}- {}", indent, node.name)),
        }
        push_lines(&node.children, depth + 1, lines);
    }
}

/// Render the full document: header, blank line, then the bullet list.
pub fn render_document(nodes: &[TocNode]) -> String {
    let mut output = String::new();
    output.push_str(TOC_HEADER);
    output.push('\n');
    output.push('\n');
    for line in render_lines(nodes) {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Print the rendered document to stdout.
pub fn print_markdown(nodes: &[TocNode]) -> io::Result<()> {
    print!("{}", render_document(nodes));
    Ok(())
}
