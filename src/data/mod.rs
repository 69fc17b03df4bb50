//! Data loading
//!
//! This module locates the bundled CSV resources and parses them into
//! typed tables.

pub mod csv;
pub mod resource;

pub use self::csv::*;
pub use self::resource::*;
