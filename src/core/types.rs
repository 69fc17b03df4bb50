//! Core type definitions for tabular data

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Free text or categorical labels
    Str,
    /// Whole numbers (counts, grams, millimetres, years)
    Int,
    /// Real-valued measurements
    Float,
    /// Calendar dates in `YYYY-MM-DD` form
    Date,
}

impl ColumnType {
    /// Whether values of this type can be summarised numerically
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Str => "str",
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::Date => "date",
        };
        f.pad(name)
    }
}

/// A single cell. `Missing` is the null sentinel for unrecorded values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Missing,
}

impl Value {
    /// Check if the cell holds no recorded value
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Numeric view of the cell; integers widen to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::Missing => write!(f, "NA"),
        }
    }
}

/// Environment variable overriding the directory the CSV resources are read from
pub const DATA_DIR_ENV: &str = "PALMERPENGUINS_DATA_DIR";

/// Tokens read as missing values in every column
pub const DEFAULT_NA_VALUES: [&str; 3] = ["", "NA", "."];

/// Configuration for the dataset loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Directory holding `penguins.csv` and `penguins_raw.csv`.
    /// `None` reads the copies compiled into the crate.
    pub data_dir: Option<PathBuf>,
    /// Cell contents (after trimming) that parse as `Value::Missing`
    pub na_values: Vec<String>,
}

impl LoaderConfig {
    /// Directory named by the environment, if any; otherwise the embedded data is used
    pub fn default_data_dir() -> Option<PathBuf> {
        std::env::var_os(DATA_DIR_ENV)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
    }

    pub fn is_na(&self, token: &str) -> bool {
        self.na_values.iter().any(|na| na == token)
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
