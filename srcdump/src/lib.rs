// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, run};
pub use crate::core::aggregator::dump_tree;
pub use models::{DumpConfig, DumpStats};
