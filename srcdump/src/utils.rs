// src/utils.rs
use std::collections::HashSet;

/// Determines whether a directory entry should be pruned from the walk.
///
/// Only directories below the root are candidates: the exclusion sets hold
/// directory names, so a plain file named `bin` is never excluded by this
/// check, and the root itself is always entered even if its name matches.
pub fn is_excluded_dir(entry: &walkdir::DirEntry, exclude_dirs: &HashSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.contains(name))
}

/// Checks a file's base name against the configured suffixes, case-sensitive.
pub fn is_included_file(name: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}
