//! Configuration types for the ToC walker

use std::path::PathBuf;

/// Configuration for ToC generation.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Directory that README link targets are expressed relative to.
    pub link_base: PathBuf,
    /// Directory names (exact or glob) pruned from the scan.
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            link_base: PathBuf::from("."),
            ignore_patterns: Vec::new(),
        }
    }
}
