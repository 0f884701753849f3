//! Coercion errors
//!
//! Failures converting between cells, field values and SQL literal text.

use mapper_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoercionError {
    #[error("Value is NULL but the field is not optional")]
    NullValue,

    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Value {value} does not fit in {target}")]
    Overflow { value: String, target: &'static str },

    #[error("Cannot read a character from an empty string")]
    EmptyCharacter,

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error(transparent)]
    Format(#[from] ConfigError),
}

impl CoercionError {
    pub fn mismatch(expected: &'static str, actual: &crate::SqlValue) -> Self {
        CoercionError::TypeMismatch {
            expected,
            actual: actual.type_name(),
        }
    }
}
