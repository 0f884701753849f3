//! Result set abstraction
//!
//! A `ResultSet` is an executed query positioned before its first row. The mapper
//! reads its column metadata once, then walks it forward row by row reading cells
//! by column label.

pub mod memory;
pub mod postgres;

use chrono::NaiveDate;
use type_mapping::SqlValue;

use crate::errors::DriverError;

pub use memory::{MemoryResultSet, MemoryResultSetError};
pub use postgres::{PgRowSet, PgRowSetError};

/// Forward-only cursor over query results
///
/// Typed getters return `Ok(None)` for SQL NULL.
pub trait ResultSet {
    /// Number of columns in the result
    fn column_count(&self) -> Result<usize, DriverError>;

    /// Label of the column at a zero-based ordinal
    fn column_label(&self, index: usize) -> Result<String, DriverError>;

    /// Move to the next row; `false` once the rows are exhausted
    fn advance(&mut self) -> Result<bool, DriverError>;

    fn get_i32(&self, column: &str) -> Result<Option<i32>, DriverError>;

    fn get_i64(&self, column: &str) -> Result<Option<i64>, DriverError>;

    fn get_string(&self, column: &str) -> Result<Option<String>, DriverError>;

    fn get_bool(&self, column: &str) -> Result<Option<bool>, DriverError>;

    fn get_f64(&self, column: &str) -> Result<Option<f64>, DriverError>;

    fn get_f32(&self, column: &str) -> Result<Option<f32>, DriverError>;

    fn get_i8(&self, column: &str) -> Result<Option<i8>, DriverError>;

    fn get_i16(&self, column: &str) -> Result<Option<i16>, DriverError>;

    fn get_date(&self, column: &str) -> Result<Option<NaiveDate>, DriverError>;

    /// The cell in the driver's native representation
    fn get_object(&self, column: &str) -> Result<SqlValue, DriverError>;
}
