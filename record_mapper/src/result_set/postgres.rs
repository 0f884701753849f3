//! PostgreSQL result set
//!
//! Wraps rows the caller already fetched with `sqlx`. Column metadata comes from the
//! first row, so an empty fetch exposes no columns unless they are supplied
//! explicitly. Typed getters decode the native column value first and convert it the
//! same way the in-memory result set does, so an `INT4` column reads through
//! `get_i64` and a `TIMESTAMP` column through `get_date`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Column, Postgres, Row, TypeInfo};
use thiserror::Error;
use type_mapping::{CoercionError, FromSqlValue, SqlValue};
use uuid::Uuid;

use super::ResultSet;
use crate::errors::DriverError;

#[derive(Debug, Error)]
pub enum PgRowSetError {
    #[error("No current row: call advance first")]
    NoCurrentRow,

    #[error("Column index {index} out of range for {count} columns")]
    ColumnIndex { index: usize, count: usize },

    #[error("Unsupported PostgreSQL type {type_name} for column '{column}'")]
    UnsupportedType { type_name: String, column: String },

    #[error("Cannot read column '{column}': {source}")]
    Coercion {
        column: String,
        #[source]
        source: CoercionError,
    },
}

/// Convert a decoded cell into the getter's type, NULL reading as `None`
fn convert_cell<T: FromSqlValue>(column: &str, value: SqlValue) -> Result<Option<T>, DriverError> {
    Option::<T>::from_sql_value(value).map_err(|source| {
        PgRowSetError::Coercion {
            column: column.to_string(),
            source,
        }
        .into()
    })
}

/// Forward-only cursor over fetched PostgreSQL rows
pub struct PgRowSet {
    columns: Vec<String>,
    rows: std::vec::IntoIter<PgRow>,
    current: Option<PgRow>,
}

impl PgRowSet {
    pub fn new(rows: Vec<PgRow>) -> Self {
        let columns: Vec<String> = rows
            .first()
            .map(|row| {
                row.columns()
                    .iter()
                    .map(|column| column.name().to_string())
                    .collect()
            })
            .unwrap_or_default();
        Self::with_columns(columns, rows)
    }

    /// Use an explicit column list, for queries that may return no rows
    pub fn with_columns(columns: Vec<String>, rows: Vec<PgRow>) -> Self {
        Self {
            columns,
            rows: rows.into_iter(),
            current: None,
        }
    }

    fn row(&self) -> Result<&PgRow, DriverError> {
        self.current
            .as_ref()
            .ok_or_else(|| PgRowSetError::NoCurrentRow.into())
    }

    fn typed<T: FromSqlValue>(&self, column: &str) -> Result<Option<T>, DriverError> {
        convert_cell(column, self.get_object(column)?)
    }

    fn get<T>(&self, column: &str) -> Result<Option<T>, DriverError>
    where
        T: for<'r> sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
    {
        Ok(self.row()?.try_get::<Option<T>, _>(column)?)
    }
}

impl ResultSet for PgRowSet {
    fn column_count(&self) -> Result<usize, DriverError> {
        Ok(self.columns.len())
    }

    fn column_label(&self, index: usize) -> Result<String, DriverError> {
        self.columns
            .get(index)
            .cloned()
            .ok_or_else(|| {
                PgRowSetError::ColumnIndex {
                    index,
                    count: self.columns.len(),
                }
                .into()
            })
    }

    fn advance(&mut self) -> Result<bool, DriverError> {
        self.current = self.rows.next();
        Ok(self.current.is_some())
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

    /// Decode by the column's PostgreSQL type name
    fn get_object(&self, column: &str) -> Result<SqlValue, DriverError> {
        let type_name = self.row()?.try_column(column)?.type_info().name().to_string();

        let value: SqlValue = match type_name.as_str() {
            "BOOL" => self.get::<bool>(column)?.into(),
            "\"CHAR\"" => self.get::<i8>(column)?.into(),
            "INT2" => self.get::<i16>(column)?.into(),
            "INT4" => self.get::<i32>(column)?.into(),
            "INT8" => self.get::<i64>(column)?.into(),
            "FLOAT4" => self.get::<f32>(column)?.into(),
            "FLOAT8" => self.get::<f64>(column)?.into(),
            "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => self.get::<String>(column)?.into(),
            "DATE" => self.get::<NaiveDate>(column)?.into(),
            "TIMESTAMP" => self.get::<NaiveDateTime>(column)?.into(),
            "TIMESTAMPTZ" => self.get::<DateTime<Utc>>(column)?.into(),
            "UUID" => self.get::<Uuid>(column)?.into(),
            "JSON" | "JSONB" => self.get::<serde_json::Value>(column)?.into(),
            other => {
                return Err(PgRowSetError::UnsupportedType {
                    type_name: other.to_string(),
                    column: column.to_string(),
                }
                .into())
            }
        };
        Ok(value)
    }
}
