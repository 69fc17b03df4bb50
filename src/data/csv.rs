//! CSV reader producing typed tables
//!
//! Reads files where:
//! - The first row is a header whose names match the schema, in order
//! - Every row has exactly as many fields as the header
//! - Any configured NA token (default `""`, `NA`, `.`) is a missing value

use crate::core::{Column, ColumnType, PenguinsError, Result, Schema, Table, Value};
use chrono::NaiveDate;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Schema-driven CSV reader
#[derive(Debug, Clone)]
pub struct CSVTableReader<'a> {
    schema: Schema,
    na_values: &'a [String],
}

impl<'a> CSVTableReader<'a> {
    pub fn new(schema: Schema, na_values: &'a [String]) -> Self {
        Self { schema, na_values }
    }

    /// Read a table from a CSV file.
    ///
    /// A file that cannot be opened is reported as `ResourceNotFound`.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Table> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PenguinsError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Reading {}", path.display());
        self.read(BufReader::new(file))
    }

    /// Read a table from any reader (for testing and flexibility)
    pub fn read<R: Read>(&self, reader: R) -> Result<Table> {
        let mut reader = ::csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        self.check_header(reader.headers()?)?;

        let mut buffers: Vec<Vec<Value>> = vec![Vec::new(); self.schema.len()];
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            for ((field, spec), buffer) in record
                .iter()
                .zip(self.schema.columns)
                .zip(buffers.iter_mut())
            {
                buffer.push(self.parse_cell(field, spec.dtype, row + 1, spec.name)?);
            }
        }

        let columns = self
            .schema
            .columns
            .iter()
            .zip(buffers)
            .map(|(spec, values)| Column::new(spec.name, spec.dtype, values))
            .collect();
        Table::new(columns)
    }

    fn check_header(&self, header: &::csv::StringRecord) -> Result<()> {
        if header.len() != self.schema.len() {
            return Err(PenguinsError::ParseError(format!(
                "expected {} columns, found {}",
                self.schema.len(),
                header.len()
            )));
        }

        for (i, (found, expected)) in header.iter().zip(self.schema.names()).enumerate() {
            if found.trim() != expected {
                return Err(PenguinsError::ParseError(format!(
                    "expected column '{}' at position {}, found '{}'",
                    expected,
                    i + 1,
                    found
                )));
            }
        }
        Ok(())
    }

    /// Parse one cell according to its column type
    fn parse_cell(&self, field: &str, dtype: ColumnType, row: usize, column: &str) -> Result<Value> {
        let text = field.trim();
        if self.na_values.iter().any(|na| na == text) {
            return Ok(Value::Missing);
        }

        let invalid = || {
            PenguinsError::ParseError(format!(
                "Invalid {dtype} value in row {row}, column '{column}': {field}"
            ))
        };

        match dtype {
            ColumnType::Str => Ok(Value::Str(text.to_string())),
            ColumnType::Int => text.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
            ColumnType::Float => text.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
            ColumnType::Date => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(Value::Date)
                .map_err(|_| invalid()),
        }
    }
}
