//! JSON output formatting

use std::io;

use crate::toc::TocNode;

/// Print the ToC forest as pretty-printed JSON to stdout.
pub fn print_json(nodes: &[TocNode]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(nodes)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
