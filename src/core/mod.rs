//! Core types, schemas and tables

pub mod error;
pub mod schema;
pub mod table;
pub mod types;

pub use self::error::*;
pub use self::schema::*;
pub use self::table::*;
pub use self::types::*;
