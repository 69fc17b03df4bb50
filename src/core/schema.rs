//! Fixed column layouts of the bundled CSV files

use crate::core::ColumnType;

/// Name and type of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub dtype: ColumnType,
}

const fn spec(name: &'static str, dtype: ColumnType) -> ColumnSpec {
    ColumnSpec { name, dtype }
}

/// Ordered list of columns a CSV header must match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    pub columns: &'static [ColumnSpec],
}

impl Schema {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}

/// The cleaned eight-column table
pub const CURATED_SCHEMA: Schema = Schema {
    columns: &[
        spec("species", ColumnType::Str),
        spec("island", ColumnType::Str),
        spec("bill_length_mm", ColumnType::Float),
        spec("bill_depth_mm", ColumnType::Float),
        spec("flipper_length_mm", ColumnType::Int),
        spec("body_mass_g", ColumnType::Int),
        spec("sex", ColumnType::Str),
        spec("year", ColumnType::Int),
    ],
};

/// The seventeen columns as collected at Palmer Station
pub const RAW_SCHEMA: Schema = Schema {
    columns: &[
        spec("studyName", ColumnType::Str),
        spec("Sample Number", ColumnType::Int),
        spec("Species", ColumnType::Str),
        spec("Region", ColumnType::Str),
        spec("Island", ColumnType::Str),
        spec("Stage", ColumnType::Str),
        spec("Individual ID", ColumnType::Str),
        spec("Clutch Completion", ColumnType::Str),
        spec("Date Egg", ColumnType::Date),
        spec("Culmen Length (mm)", ColumnType::Float),
        spec("Culmen Depth (mm)", ColumnType::Float),
        spec("Flipper Length (mm)", ColumnType::Int),
        spec("Body Mass (g)", ColumnType::Int),
        spec("Sex", ColumnType::Str),
        spec("Delta 15 N (o/oo)", ColumnType::Float),
        spec("Delta 13 C (o/oo)", ColumnType::Float),
        spec("Comments", ColumnType::Str),
    ],
};

/// Morphological measurements used as classification inputs
pub const FEATURE_COLUMNS: [&str; 4] = [
    "bill_length_mm",
    "bill_depth_mm",
    "flipper_length_mm",
    "body_mass_g",
];

/// Classification label
pub const TARGET_COLUMN: &str = "species";
