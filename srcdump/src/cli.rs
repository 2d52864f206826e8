// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::core::aggregator::dump_tree;
use crate::models::DumpConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to dump (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub directory: PathBuf,

    /// Output file the records are written to
    #[arg(short, long, default_value = "Lethal Access.txt")]
    pub output: PathBuf,

    /// Directory names to skip entirely (comma-separated)
    #[arg(short = 'x', long, default_value = "bin,obj,config")]
    pub exclude: String,

    /// File extensions to include (comma-separated)
    #[arg(short, long, default_value = ".cs,.json")]
    pub extensions: String,
}

/// Runs one dump with the parsed arguments.
///
/// Per-file read failures are reported by the aggregator and do not affect
/// the result; only a top-level failure (output file cannot be created, root
/// cannot be read) propagates.
///
/// # Errors
///
/// This function may return an error if the aggregator fails at the top
/// level; see [`dump_tree`].
pub fn run(args: Args) -> Result<()> {
    let config = DumpConfig {
        root: args.directory,
        output: args.output.clone(),
        exclude_dirs: args
            .exclude
            .split(',')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        include_extensions: args
            .extensions
            .split(',')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
    };

    let stats = dump_tree(&config)?;

    println!(
        "All files processed. Output written to {}.",
        args.output.display()
    );
    if stats.failed > 0 {
        println!("{} file(s) could not be read and were skipped.", stats.failed);
    }

    Ok(())
}
