// src/models.rs
use std::collections::HashSet;
use std::path::PathBuf;

/// Configuration for a single dump run. The exclusion and inclusion sets are
/// explicit fields so callers can extend them without touching the traversal.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    /// Directory the traversal starts from.
    pub root: PathBuf,
    /// File every record is appended to.
    pub output: PathBuf,
    /// Directory base names that are never entered, matched exactly and
    /// case-sensitively.
    pub exclude_dirs: HashSet<String>,
    /// Filename suffixes that select a file for inclusion, case-sensitive.
    pub include_extensions: Vec<String>,
}

impl DumpConfig {
    /// Builds a config with the default exclusion and inclusion sets.
    #[must_use]
    pub fn new(root: PathBuf, output: PathBuf) -> Self {
        Self {
            root,
            output,
            exclude_dirs: ["bin", "obj", "config"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            include_extensions: [".cs", ".json"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Counters accumulated over one dump run.
#[derive(Debug, Default)]
pub struct DumpStats {
    pub processed: u64,
    pub failed: u64,
}

impl DumpStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            processed: 0,
            failed: 0,
        }
    }
}
