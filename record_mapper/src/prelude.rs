//! Convenience re-exports for common record-mapper usage

// Core traits
pub use crate::traits::{FieldDescriptor, Record};

// Result sets
pub use crate::result_set::{MemoryResultSet, PgRowSet, ResultSet};

// Field resolution
pub use crate::resolver::{ColumnSet, FieldBinding};

// Engines
pub use crate::deserializer::Deserializer;
pub use crate::serializer::Serializer;

// Error types
pub use crate::errors::{DriverError, FieldAccessError, MapperError};

// Value types used by record implementations
pub use mapper_config::MapperConfig;
pub use type_mapping::{FieldKind, FromSqlValue, SqlValue, ToSqlValue};
