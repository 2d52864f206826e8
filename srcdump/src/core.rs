// src/core.rs
pub mod aggregator;
