use thiserror::Error;
use type_mapping::CoercionError;

/// Fault raised by a result set implementation
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reading or writing a single field of a record
#[derive(Error, Debug)]
pub enum FieldAccessError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{field}' cannot hold the value: {source}")]
    Coercion {
        field: &'static str,
        #[source]
        source: CoercionError,
    },
}

impl FieldAccessError {
    pub fn coercion(field: &'static str, source: CoercionError) -> Self {
        FieldAccessError::Coercion { field, source }
    }
}

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Failed to read result set metadata: {0}")]
    MetadataAccess(#[source] DriverError),

    #[error("Failed to advance result set: {0}")]
    RowAccess(#[source] DriverError),

    #[error("Failed to read column '{column}' for field '{field}': {source}")]
    CellRead {
        field: &'static str,
        column: String,
        #[source]
        source: DriverError,
    },

    #[error("Column '{column}' holds an empty string but field '{field}' needs a character")]
    EmptyCharacter { field: &'static str, column: String },

    #[error("Failed to set field '{field}': {source}")]
    FieldAssignment {
        field: &'static str,
        #[source]
        source: FieldAccessError,
    },

    #[error("Failed to read field '{field}': {source}")]
    FieldRead {
        field: &'static str,
        #[source]
        source: FieldAccessError,
    },

    #[error("Failed to format field '{field}' as SQL: {source}")]
    Literal {
        field: &'static str,
        #[source]
        source: CoercionError,
    },
}
