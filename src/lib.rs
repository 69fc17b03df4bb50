//! The Palmer Archipelago penguin dataset for Rust
//!
//! Bundles the curated (8-column) and raw (17-column) penguin tables and
//! loads them into typed, column-oriented tables.

pub mod api;
pub mod core;
pub mod data;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::{
    features_and_target, load_penguins, load_penguins_raw, PenguinsData, PenguinsLoader,
    DESCRIPTION,
};
pub use crate::core::types::*;
pub use crate::core::{Column, PenguinsError, Result, Schema, Table};
pub use crate::data::{CSVTableReader, Dataset};
pub use crate::utils::{describe, ColumnSummary};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
