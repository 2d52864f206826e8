// src/core/aggregator.rs
use crate::models::{DumpConfig, DumpStats};
use crate::utils::{is_excluded_dir, is_included_file};
use anyhow::{Context as _, Result};
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write as _};
use walkdir::WalkDir;

/// Walks the configured tree and appends one record per matching file to the
/// output file.
///
/// Excluded directories are pruned before the walk descends into them, so
/// nothing below an excluded directory is ever visited. Entries are visited
/// in lexicographic file-name order, which makes repeated runs over unchanged
/// input byte-identical.
///
/// A file that cannot be read or decoded is reported to stderr, counted, and
/// skipped; the walk continues. The output path itself is skipped if the walk
/// encounters it, so the run never reads its own partially-written output.
///
/// # Errors
///
/// This function may return an error if:
/// * The output file cannot be created or truncated
/// * The root directory cannot be read at all
/// * Writing or flushing the output file fails
pub fn dump_tree(config: &DumpConfig) -> Result<DumpStats> {
    let absolute_root = if config.root.is_absolute() {
        config.root.clone()
    } else {
        env::current_dir()?.join(&config.root)
    };
    let absolute_output = if config.output.is_absolute() {
        config.output.clone()
    } else {
        env::current_dir()?.join(&config.output)
    };

    let file = File::create(&absolute_output).with_context(|| {
        format!(
            "Failed to create output file: {}",
            absolute_output.display()
        )
    })?;
    let mut output = BufWriter::new(file);
    let mut stats = DumpStats::new();

    for entry in WalkDir::new(&absolute_root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &config.exclude_dirs))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                if err.depth() == 0 {
                    return Err(anyhow::Error::from(err).context(format!(
                        "Failed to read root directory: {}",
                        absolute_root.display()
                    )));
                }
                eprintln!("Error reading entry: {err}");
                stats.failed = stats.failed.saturating_add(1);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // Names that are not valid UTF-8 cannot match a suffix.
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !is_included_file(name, &config.include_extensions) {
            continue;
        }

        let path = entry.path();
        if path == absolute_output {
            continue;
        }

        match fs::read_to_string(path) {
            Ok(content) => {
                write!(output, "{name}\n{}\n\n{content}\n\n\n\n\n\n", path.display())
                    .with_context(|| format!("Failed to write record for: {}", path.display()))?;
                println!("Processed file: {}", path.display());
                stats.processed = stats.processed.saturating_add(1);
            }
            Err(err) => {
                eprintln!("Error reading file {}: {err}", path.display());
                stats.failed = stats.failed.saturating_add(1);
            }
        }
    }

    output.flush().with_context(|| {
        format!(
            "Failed to flush output file: {}",
            absolute_output.display()
        )
    })?;

    Ok(stats)
}
