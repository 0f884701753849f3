//! SQL type conversion utilities
//!
//! This module maps Rust field types to field kinds and renders field values as
//! SQL literal text for INSERT statements.

use mapper_config::MapperConfig;

use crate::errors::CoercionError;
use crate::types::{FieldKind, SqlValue};

/// Literal emitted for absent or NULL values
pub const NULL_VALUE: &str = "NULL";

/// Map Rust type names to field kinds
///
/// `Option<T>` maps to the kind of `T`; unknown types are opaque.
pub fn rust_type_to_field_kind(rust_type: &str) -> FieldKind {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized = rust_type.replace(' ', "");
    match unwrap_optional_type(&normalized) {
        "i32" => FieldKind::Int32,
        "i64" => FieldKind::Int64,
        "String" | "std::string::String" | "alloc::string::String" => FieldKind::Text,
        "bool" => FieldKind::Boolean,
        "f64" => FieldKind::Float64,
        "f32" => FieldKind::Float32,
        "i8" => FieldKind::Byte,
        "i16" => FieldKind::Short,
        "char" => FieldKind::Char,
        "NaiveDate" | "chrono::NaiveDate" => FieldKind::Date,
        "NaiveDateTime"
        | "chrono::NaiveDateTime"
        | "DateTime<Utc>"
        | "DateTime<chrono::Utc>"
        | "chrono::DateTime<Utc>"
        | "chrono::DateTime<chrono::Utc>" => FieldKind::DateTime,
        _ => FieldKind::Opaque,
    }
}

/// Get the FieldKind variant name for a Rust type
/// This is used for code generation
pub fn rust_type_to_field_kind_variant(rust_type: &str) -> &'static str {
    rust_type_to_field_kind(rust_type).variant_name()
}

/// Check if a Rust type is Optional (nullable in SQL)
pub fn is_optional_type(rust_type: &str) -> bool {
    let normalized = rust_type.replace(' ', "");
    unwrap_optional_type(&normalized).len() != normalized.len()
}

/// Strip one `Option<...>` layer from a whitespace-free type string
pub fn unwrap_optional_type(rust_type: &str) -> &str {
    ["Option<", "std::option::Option<", "core::option::Option<"]
        .iter()
        .find_map(|prefix| rust_type.strip_prefix(prefix))
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(rust_type)
}

/// Render a field value as SQL literal text according to its declared kind
///
/// - NULL values become the bare `NULL` token
/// - date-time kinds become `CONVERT(DATETIME,'...')`, date kinds `CONVERT(DATE,'...')`
/// - integers, floats and unquoted booleans are written as-is
/// - everything else is wrapped in single quotes
///
/// Embedded quote characters are not escaped.
pub fn sql_literal(
    kind: FieldKind,
    value: &SqlValue,
    config: &MapperConfig,
) -> Result<String, CoercionError> {
    if value.is_null() {
        return Ok(NULL_VALUE.to_string());
    }

    match kind {
        FieldKind::DateTime => {
            let date_time = value
                .as_naive_date_time()
                .ok_or_else(|| CoercionError::mismatch("DateTime", value))?;
            let formatted = config.date_time_format().format_date_time(&date_time)?;
            Ok(format!("CONVERT(DATETIME,'{}')", formatted))
        }
        FieldKind::Date => {
            let date = value
                .as_naive_date()
                .ok_or_else(|| CoercionError::mismatch("Date", value))?;
            let formatted = config.date_format().format_date(&date)?;
            Ok(format!("CONVERT(DATE,'{}')", formatted))
        }
        kind if kind.is_unquoted_numeric() => Ok(value.to_string()),
        FieldKind::Boolean if !config.is_wrap_booleans_in_quotes() => Ok(value.to_string()),
        _ => Ok(format!("'{}'", value)),
    }
}
