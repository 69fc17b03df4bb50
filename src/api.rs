//! High-level API for loading the penguins dataset
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use palmerpenguins::api::{load_penguins, load_penguins_raw};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Full curated table
//! let penguins = load_penguins(false, false)?.into_table().unwrap();
//! assert_eq!(penguins.shape(), (344, 8));
//!
//! // Measurements and species label, complete cases only
//! let (features, target) = load_penguins(true, true)?
//!     .into_features_and_target()
//!     .unwrap();
//! assert_eq!(features.n_rows(), target.len());
//!
//! let raw = load_penguins_raw()?;
//! assert_eq!(raw.n_cols(), 17);
//! # Ok(())
//! # }
//! ```

use crate::core::{Column, LoaderConfig, Result, Table, FEATURE_COLUMNS, TARGET_COLUMN};
use crate::data::{CSVTableReader, Dataset};
use log::{debug, info};
use std::path::PathBuf;

/// Description of the curated dataset
pub const DESCRIPTION: &str = "\
Palmer Archipelago (Antarctica) penguin data

Size and sex measurements of adult foraging Adelie, Chinstrap and Gentoo
penguins near Palmer Station, collected 2007-2009. A drop-in alternative to
the Iris dataset for exploration, visualization and classification.

    Classes                          3
    Samples per class    Adelie 152, Gentoo 124, Chinstrap 68
    Samples total                  344
    Dimensionality                   8
    Features             real, integer, string

Columns
    species              penguin species (Adelie, Chinstrap, Gentoo)
    island               island in the Palmer Archipelago (Biscoe, Dream, Torgersen)
    bill_length_mm       bill length in millimeters
    bill_depth_mm        bill depth in millimeters
    flipper_length_mm    flipper length in millimeters (integer)
    body_mass_g          body mass in grams (integer)
    sex                  penguin sex (female, male)
    year                 study year (2007, 2008, 2009)

The raw table keeps the 17 columns as collected: study identifiers, sample
numbers, full species names, region, island, stage, individual IDs, clutch
completion, egg dates, culmen measurements, flipper length, body mass, sex,
blood isotope ratios (delta 15N, delta 13C) and comments.

Data originally published by Gorman, Williams and Fraser (2014), Palmer
Station LTER.
";

/// Result of loading the curated dataset
#[derive(Debug, Clone, PartialEq)]
pub enum PenguinsData {
    /// The full eight-column table
    Table(Table),
    /// Measurement columns and the row-aligned species label
    FeaturesTarget { features: Table, target: Column },
}

impl PenguinsData {
    pub fn into_table(self) -> Option<Table> {
        match self {
            PenguinsData::Table(table) => Some(table),
            PenguinsData::FeaturesTarget { .. } => None,
        }
    }

    pub fn into_features_and_target(self) -> Option<(Table, Column)> {
        match self {
            PenguinsData::Table(_) => None,
            PenguinsData::FeaturesTarget { features, target } => Some((features, target)),
        }
    }

    pub fn n_rows(&self) -> usize {
        match self {
            PenguinsData::Table(table) => table.n_rows(),
            PenguinsData::FeaturesTarget { features, .. } => features.n_rows(),
        }
    }
}

/// Split a curated table into the four measurement columns and the species label
pub fn features_and_target(table: &Table) -> Result<(Table, Column)> {
    let features = table.select(&FEATURE_COLUMNS)?;
    let target = table.try_column(TARGET_COLUMN)?.clone();
    Ok((features, target))
}

/// Dataset loader with builder-style configuration
#[derive(Debug, Clone, Default)]
pub struct PenguinsLoader {
    config: LoaderConfig,
}

impl PenguinsLoader {
    /// Loader reading the embedded data, or `PALMERPENGUINS_DATA_DIR` when set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Read the CSV resources from `data_dir` instead
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = Some(data_dir.into());
        self
    }

    /// Replace the tokens treated as missing values
    pub fn with_na_values<I, S>(mut self, na_values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.na_values = na_values.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read and parse one bundled dataset, unfiltered
    pub fn load_table(&self, dataset: Dataset) -> Result<Table> {
        let reader = CSVTableReader::new(dataset.schema(), &self.config.na_values);

        let table = match &self.config.data_dir {
            Some(dir) => {
                let path = dataset.path_in(dir);
                debug!("Loading {dataset} from {}", path.display());
                reader.read_file(&path)?
            }
            None => {
                debug!("Loading embedded {dataset}");
                reader.read(dataset.embedded().as_bytes())?
            }
        };

        info!(
            "Loaded {dataset}: {} rows x {} columns",
            table.n_rows(),
            table.n_cols()
        );
        Ok(table)
    }

    /// Load the curated dataset.
    ///
    /// With `drop_missing`, every row holding a missing value is removed from
    /// the full table first, so features and target stay row-aligned.
    pub fn load(&self, return_features_and_target: bool, drop_missing: bool) -> Result<PenguinsData> {
        let mut table = self.load_table(Dataset::Curated)?;

        if drop_missing {
            let before = table.n_rows();
            table = table.drop_missing();
            debug!(
                "Dropped {} rows with missing values",
                before - table.n_rows()
            );
        }

        if return_features_and_target {
            let (features, target) = features_and_target(&table)?;
            Ok(PenguinsData::FeaturesTarget { features, target })
        } else {
            Ok(PenguinsData::Table(table))
        }
    }

    /// Load the raw dataset
    pub fn load_raw(&self) -> Result<Table> {
        self.load_table(Dataset::Raw)
    }
}

/// Load the curated dataset from the default source
pub fn load_penguins(return_features_and_target: bool, drop_missing: bool) -> Result<PenguinsData> {
    PenguinsLoader::new().load(return_features_and_target, drop_missing)
}

/// Load the raw dataset from the default source
pub fn load_penguins_raw() -> Result<Table> {
    PenguinsLoader::new().load_raw()
}
