//! Bundled dataset resources

use crate::core::{Schema, CURATED_SCHEMA, RAW_SCHEMA};
use std::fmt;
use std::path::{Path, PathBuf};

/// The two CSV files shipped with the crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Cleaned eight-column table
    Curated,
    /// Seventeen-column table with full provenance
    Raw,
}

impl Dataset {
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::Curated => "penguins.csv",
            Dataset::Raw => "penguins_raw.csv",
        }
    }

    pub fn schema(self) -> Schema {
        match self {
            Dataset::Curated => CURATED_SCHEMA,
            Dataset::Raw => RAW_SCHEMA,
        }
    }

    /// Label of the column holding the species name
    pub fn species_column(self) -> &'static str {
        match self {
            Dataset::Curated => "species",
            Dataset::Raw => "Species",
        }
    }

    /// CSV text compiled into the crate
    pub fn embedded(self) -> &'static str {
        match self {
            Dataset::Curated => include_str!("../../data/penguins.csv"),
            Dataset::Raw => include_str!("../../data/penguins_raw.csv"),
        }
    }

    /// Location of this dataset under `data_dir`
    pub fn path_in(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Dataset::Curated => "penguins",
            Dataset::Raw => "penguins_raw",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl std::str::FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "penguins" | "curated" => Ok(Self::Curated),
            "penguins_raw" | "raw" => Ok(Self::Raw),
            _ => Err(format!("cannot parse '{s}' as Dataset")),
        }
    }
}
