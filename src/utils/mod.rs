//! Summary statistics for loaded tables

use crate::core::{Column, ColumnType, Table};
use serde::Serialize;
use std::fmt;

/// Per-column summary, in the spirit of a dataframe `describe()`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub name: String,
    pub dtype: ColumnType,
    /// Non-missing cells
    pub count: usize,
    pub missing: usize,
    /// Present for numeric columns with at least one value
    pub numeric: Option<NumericStats>,
    /// Distinct non-missing values
    pub n_unique: usize,
    /// Most frequent value and its count (non-numeric columns only)
    pub top: Option<(String, usize)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericStats {
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl NumericStats {
    /// Compute statistics over the given values, `None` if there are none
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        let variance = if values.len() > 1 {
            values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
        } else {
            0.0
        };

        Some(Self {
            mean,
            std: variance.sqrt(),
            min,
            max,
        })
    }
}

impl ColumnSummary {
    pub fn from_column(column: &Column) -> Self {
        let missing = column.missing_count();
        let numeric = if column.dtype().is_numeric() {
            let values: Vec<f64> = column.as_f64().into_iter().flatten().collect();
            NumericStats::from_values(&values)
        } else {
            None
        };
        let top = if column.dtype().is_numeric() {
            None
        } else {
            column.value_counts().into_iter().next()
        };

        Self {
            name: column.name().to_string(),
            dtype: column.dtype(),
            count: column.len() - missing,
            missing,
            numeric,
            n_unique: column.unique().len(),
            top,
        }
    }
}

impl fmt::Display for ColumnSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:<6} count={:<4} missing={:<3}",
            self.name, self.dtype, self.count, self.missing
        )?;
        if let Some(stats) = &self.numeric {
            write!(
                f,
                " mean={:.3} std={:.3} min={} max={}",
                stats.mean, stats.std, stats.min, stats.max
            )?;
        }
        if let Some((value, n)) = &self.top {
            write!(f, " unique={} top={} ({})", self.n_unique, value, n)?;
        }
        Ok(())
    }
}

/// Summarise every column of a table, in column order
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table.columns().iter().map(ColumnSummary::from_column).collect()
}
