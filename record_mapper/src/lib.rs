//! Record Mapper - field-to-column reflection and coercion engine for rowmap
//!
//! This crate provides the `Record` trait describing a record type's fields, the
//! resolver that binds fields to column labels, the `ResultSet` abstraction over an
//! executed query, and the two engines: result rows into records and records into
//! INSERT statements.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod coercion;
pub mod deserializer;
pub mod errors;
pub mod prelude;
pub mod resolver;
pub mod result_set;
pub mod serializer;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use deserializer::Deserializer;
pub use errors::{DriverError, FieldAccessError, MapperError};
pub use resolver::{ColumnSet, FieldBinding};
pub use result_set::{MemoryResultSet, MemoryResultSetError, PgRowSet, PgRowSetError, ResultSet};
pub use serializer::Serializer;
pub use traits::{FieldDescriptor, Record};

// Re-export crates used by derive-generated code
pub use mapper_config;
pub use type_mapping;
