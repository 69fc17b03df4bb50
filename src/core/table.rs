//! In-memory column-oriented tables

use crate::core::{ColumnType, PenguinsError, Result, Value};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::io::Write;

/// A named, typed sequence of values, one per row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    values: Vec<Value>,
}

impl Column {
    /// Create a column. Values are expected to be of `dtype` or `Value::Missing`.
    pub fn new(name: impl Into<String>, dtype: ColumnType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            dtype,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&Value> {
        self.values.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Number of missing cells
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_missing()).count()
    }

    /// Numeric view of every row, `None` where the cell is missing or non-numeric
    pub fn as_f64(&self) -> Vec<Option<f64>> {
        self.values.iter().map(Value::as_f64).collect()
    }

    /// Occurrences of each non-missing value, most frequent first.
    ///
    /// Ties keep the order in which values first appear.
    pub fn value_counts(&self) -> Vec<(String, usize)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<(String, usize)> = Vec::new();

        for value in self.values.iter().filter(|v| !v.is_missing()) {
            let key = value.to_string();
            match index.get(&key) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    index.insert(key.clone(), counts.len());
                    counts.push((key, 1));
                }
            }
        }

        // Stable sort keeps first-appearance order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Distinct non-missing values in order of first appearance
    pub fn unique(&self) -> Vec<&Value> {
        let mut seen: Vec<&Value> = Vec::new();
        for value in self.values.iter().filter(|v| !v.is_missing()) {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen
    }

    fn take(&self, rows: &[usize]) -> Column {
        Column {
            name: self.name.clone(),
            dtype: self.dtype,
            values: rows.iter().map(|&i| self.values[i].clone()).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Ordered collection of equally long columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table, rejecting columns whose length differs from the first
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(PenguinsError::LengthMismatch {
                    column: bad.name.clone(),
                    expected,
                    actual: bad.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Like [`Table::column`] but reports the missing name as an error
    pub fn try_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| PenguinsError::ColumnNotFound(name.to_string()))
    }

    /// Cells of row `i` in column order
    pub fn row(&self, i: usize) -> Option<Vec<&Value>> {
        if i >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[i]).collect())
    }

    /// Project onto the named columns, in the order given
    pub fn select(&self, names: &[&str]) -> Result<Table> {
        let columns = names
            .iter()
            .map(|name| self.try_column(name).cloned())
            .collect::<Result<Vec<_>>>()?;
        Ok(Table { columns })
    }

    /// Keep the given rows, in the order given. Indices must be below `n_rows()`.
    pub(crate) fn take_rows(&self, rows: &[usize]) -> Table {
        Table {
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
        }
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Table {
        let rows: Vec<usize> = (0..n.min(self.n_rows())).collect();
        self.take_rows(&rows)
    }

    /// Indices of rows with no missing cell
    pub fn complete_rows(&self) -> Vec<usize> {
        (0..self.n_rows())
            .filter(|&i| self.columns.iter().all(|c| !c.values[i].is_missing()))
            .collect()
    }

    /// New table without the rows that contain any missing cell
    pub fn drop_missing(&self) -> Table {
        self.take_rows(&self.complete_rows())
    }

    /// Total missing cells across all columns
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }

    /// Append a column, which must match the current row count
    pub fn with_column(mut self, column: Column) -> Result<Table> {
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            return Err(PenguinsError::LengthMismatch {
                column: column.name,
                expected: self.n_rows(),
                actual: column.values.len(),
            });
        }
        self.columns.push(column);
        Ok(self)
    }

    /// Write the table as CSV with a header row; missing cells become `NA`
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(self.column_names())?;
        for i in 0..self.n_rows() {
            writer.write_record(self.columns.iter().map(|c| c.values[i].to_string()))?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// A row borrowed from a table, serialized as a `{column: value}` map
struct RowRecord<'a> {
    table: &'a Table,
    row: usize,
}

impl Serialize for RowRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.table.n_cols()))?;
        for column in &self.table.columns {
            map.serialize_entry(&column.name, &column.values[self.row])?;
        }
        map.end()
    }
}

/// Tables serialize as a sequence of row records
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.n_rows()))?;
        for row in 0..self.n_rows() {
            seq.serialize_element(&RowRecord { table: self, row })?;
        }
        seq.end()
    }
}
