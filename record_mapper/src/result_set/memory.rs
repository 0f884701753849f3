//! In-memory result set
//!
//! Rows of `SqlValue` under labelled columns. Useful for tests and for callers that
//! already hold their data in memory.

use chrono::NaiveDate;
use thiserror::Error;
use type_mapping::{CoercionError, FromSqlValue, SqlValue};

use super::ResultSet;
use crate::errors::DriverError;

#[derive(Debug, Error)]
pub enum MemoryResultSetError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column index {index} out of range for {count} columns")]
    ColumnIndex { index: usize, count: usize },

    #[error("No current row")]
    NoCurrentRow,

    #[error("Row {row} has no cell for column '{column}'")]
    MissingCell { row: usize, column: String },

    #[error("Cannot read column '{column}': {source}")]
    Coercion {
        column: String,
        #[source]
        source: CoercionError,
    },
}

/// A result set held entirely in memory
///
/// ```
/// use record_mapper::{MemoryResultSet, ResultSet};
/// use type_mapping::SqlValue;
///
/// let mut rows = MemoryResultSet::new(["id", "name"])
///     .with_row(vec![SqlValue::Integer(1), SqlValue::Text("Alice".into())]);
///
/// assert!(rows.advance().unwrap());
/// assert_eq!(rows.get_i64("ID").unwrap(), Some(1));
/// assert!(!rows.advance().unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryResultSet {
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
    cursor: Option<usize>,
}

impl MemoryResultSet {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            cursor: None,
        }
    }

    pub fn with_row(mut self, row: Vec<SqlValue>) -> Self {
        self.rows.push(row);
        self
    }

    pub fn push_row(&mut self, row: Vec<SqlValue>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Label lookup: exact first, then ignoring case
    fn column_index(&self, column: &str) -> Result<usize, MemoryResultSetError> {
        self.columns
            .iter()
            .position(|label| label == column)
            .or_else(|| {
                self.columns
                    .iter()
                    .position(|label| label.to_lowercase() == column.to_lowercase())
            })
            .ok_or_else(|| MemoryResultSetError::UnknownColumn(column.to_string()))
    }

    fn cell(&self, column: &str) -> Result<&SqlValue, MemoryResultSetError> {
        let index = self.column_index(column)?;
        let row = self
            .cursor
            .filter(|row| *row < self.rows.len())
            .ok_or(MemoryResultSetError::NoCurrentRow)?;
        self.rows[row]
            .get(index)
            .ok_or_else(|| MemoryResultSetError::MissingCell {
                row,
                column: column.to_string(),
            })
    }

    fn typed<T: FromSqlValue>(&self, column: &str) -> Result<Option<T>, DriverError> {
        let value = self.cell(column)?.clone();
        Option::<T>::from_sql_value(value).map_err(|source| {
            MemoryResultSetError::Coercion {
                column: column.to_string(),
                source,
            }
            .into()
        })
    }
}

impl ResultSet for MemoryResultSet {
    fn column_count(&self) -> Result<usize, DriverError> {
        Ok(self.columns.len())
    }

    fn column_label(&self, index: usize) -> Result<String, DriverError> {
        self.columns.get(index).cloned().ok_or_else(|| {
            MemoryResultSetError::ColumnIndex {
                index,
                count: self.columns.len(),
            }
            .into()
        })
    }

    fn advance(&mut self) -> Result<bool, DriverError> {
        let next = self.cursor.map_or(0, |row| row + 1).min(self.rows.len());
        self.cursor = Some(next);
        Ok(next < self.rows.len())
    }

    fn get_i32(&self, column: &str) -> Result<Option<i32>, DriverError> {
        self.typed(column)
    }

    fn get_i64(&self, column: &str) -> Result<Option<i64>, DriverError> {
        self.typed(column)
    }

    fn get_string(&self, column: &str) -> Result<Option<String>, DriverError> {
        self.typed(column)
    }

    fn get_bool(&self, column: &str) -> Result<Option<bool>, DriverError> {
        self.typed(column)
    }

    fn get_f64(&self, column: &str) -> Result<Option<f64>, DriverError> {
        self.typed(column)
    }

    fn get_f32(&self, column: &str) -> Result<Option<f32>, DriverError> {
        self.typed(column)
    }

    fn get_i8(&self, column: &str) -> Result<Option<i8>, DriverError> {
        self.typed(column)
    }

    fn get_i16(&self, column: &str) -> Result<Option<i16>, DriverError> {
        self.typed(column)
    }

    fn get_date(&self, column: &str) -> Result<Option<NaiveDate>, DriverError> {
        self.typed(column)
    }

    fn get_object(&self, column: &str) -> Result<SqlValue, DriverError> {
        Ok(self.cell(column)?.clone())
    }
}
