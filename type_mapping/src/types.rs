//! Type mapping definitions
//!
//! This module provides the closed set of field kinds the mapper dispatches on and
//! the runtime value carried between result set cells, record fields and SQL text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Semantic kind of a record field, decided once per field from its declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Int32,
    Int64,
    Text,
    Boolean,
    Float64,
    Float32,
    Byte,
    Short,
    Char,
    Date,
    DateTime,
    /// Anything else; read and written through the driver's native value
    Opaque,
}

impl FieldKind {
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Int32,
        FieldKind::Int64,
        FieldKind::Text,
        FieldKind::Boolean,
        FieldKind::Float64,
        FieldKind::Float32,
        FieldKind::Byte,
        FieldKind::Short,
        FieldKind::Char,
        FieldKind::Date,
        FieldKind::DateTime,
        FieldKind::Opaque,
    ];

    /// Variant name, used by the derive macro to emit the kind as a path
    pub fn variant_name(self) -> &'static str {
        match self {
            FieldKind::Int32 => "Int32",
            FieldKind::Int64 => "Int64",
            FieldKind::Text => "Text",
            FieldKind::Boolean => "Boolean",
            FieldKind::Float64 => "Float64",
            FieldKind::Float32 => "Float32",
            FieldKind::Byte => "Byte",
            FieldKind::Short => "Short",
            FieldKind::Char => "Char",
            FieldKind::Date => "Date",
            FieldKind::DateTime => "DateTime",
            FieldKind::Opaque => "Opaque",
        }
    }

    pub fn from_variant_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.variant_name().eq_ignore_ascii_case(name))
    }

    /// Value a NULL cell reads as for a non-optional numeric or boolean field
    pub fn zero_value(self) -> Option<SqlValue> {
        match self {
            FieldKind::Int32 => Some(SqlValue::Integer(0)),
            FieldKind::Int64 => Some(SqlValue::BigInt(0)),
            FieldKind::Boolean => Some(SqlValue::Boolean(false)),
            FieldKind::Float64 => Some(SqlValue::Double(0.0)),
            FieldKind::Float32 => Some(SqlValue::Float(0.0)),
            FieldKind::Byte => Some(SqlValue::TinyInt(0)),
            FieldKind::Short => Some(SqlValue::SmallInt(0)),
            _ => None,
        }
    }

    /// Kinds written to SQL as bare numbers
    pub fn is_unquoted_numeric(self) -> bool {
        matches!(
            self,
            FieldKind::Int32 | FieldKind::Int64 | FieldKind::Float64 | FieldKind::Float32
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.variant_name())
    }
}

/// Runtime value of a cell or a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    TinyInt(i8),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Text(String),
    Char(char),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Timestamp(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Short variant name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "Null",
            SqlValue::TinyInt(_) => "TinyInt",
            SqlValue::SmallInt(_) => "SmallInt",
            SqlValue::Integer(_) => "Integer",
            SqlValue::BigInt(_) => "BigInt",
            SqlValue::Float(_) => "Float",
            SqlValue::Double(_) => "Double",
            SqlValue::Boolean(_) => "Boolean",
            SqlValue::Text(_) => "Text",
            SqlValue::Char(_) => "Char",
            SqlValue::Date(_) => "Date",
            SqlValue::DateTime(_) => "DateTime",
            SqlValue::Timestamp(_) => "Timestamp",
            SqlValue::Uuid(_) => "Uuid",
            SqlValue::Json(_) => "Json",
        }
    }

    /// Date part of any temporal value
    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        match self {
            SqlValue::Date(date) => Some(*date),
            SqlValue::DateTime(date_time) => Some(date_time.date()),
            SqlValue::Timestamp(timestamp) => Some(timestamp.date_naive()),
            _ => None,
        }
    }

    /// Any temporal value as a naive date-time; timestamps are taken in UTC
    pub fn as_naive_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            SqlValue::Date(date) => date.and_hms_opt(0, 0, 0),
            SqlValue::DateTime(date_time) => Some(*date_time),
            SqlValue::Timestamp(timestamp) => Some(timestamp.naive_utc()),
            _ => None,
        }
    }
}

/// Plain string form, as embedded in SQL text
impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::TinyInt(v) => write!(f, "{}", v),
            SqlValue::SmallInt(v) => write!(f, "{}", v),
            SqlValue::Integer(v) => write!(f, "{}", v),
            SqlValue::BigInt(v) => write!(f, "{}", v),
            // `12.0`, not `12`
            SqlValue::Float(v) => write!(f, "{:?}", v),
            SqlValue::Double(v) => write!(f, "{:?}", v),
            SqlValue::Boolean(v) => write!(f, "{}", v),
            SqlValue::Text(v) => f.write_str(v),
            SqlValue::Char(v) => write!(f, "{}", v),
            SqlValue::Date(v) => write!(f, "{}", v),
            SqlValue::DateTime(v) => write!(f, "{}", v),
            SqlValue::Timestamp(v) => write!(f, "{}", v),
            SqlValue::Uuid(v) => write!(f, "{}", v),
            SqlValue::Json(v) => write!(f, "{}", v),
        }
    }
}

/// Convert basic Rust types to SqlValue
impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<i8> for SqlValue {
    fn from(val: i8) -> Self {
        SqlValue::TinyInt(val)
    }
}

impl From<i16> for SqlValue {
    fn from(val: i16) -> Self {
        SqlValue::SmallInt(val)
    }
}

impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::BigInt(val)
    }
}

impl From<f32> for SqlValue {
    fn from(val: f32) -> Self {
        SqlValue::Float(val)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Double(val)
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Boolean(val)
    }
}

impl From<char> for SqlValue {
    fn from(val: char) -> Self {
        SqlValue::Char(val)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(val: NaiveDate) -> Self {
        SqlValue::Date(val)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(val: NaiveDateTime) -> Self {
        SqlValue::DateTime(val)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(val: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(val)
    }
}

impl From<Uuid> for SqlValue {
    fn from(val: Uuid) -> Self {
        SqlValue::Uuid(val)
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(val: serde_json::Value) -> Self {
        SqlValue::Json(val)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_values() {
        assert_eq!(FieldKind::Int32.zero_value(), Some(SqlValue::Integer(0)));
        assert_eq!(FieldKind::Boolean.zero_value(), Some(SqlValue::Boolean(false)));
        assert_eq!(FieldKind::Float64.zero_value(), Some(SqlValue::Double(0.0)));
        assert_eq!(FieldKind::Byte.zero_value(), Some(SqlValue::TinyInt(0)));
        assert_eq!(FieldKind::Text.zero_value(), None);
        assert_eq!(FieldKind::Date.zero_value(), None);
        assert_eq!(FieldKind::Char.zero_value(), None);
    }

    #[test]
    fn test_display_floats() {
        assert_eq!(SqlValue::Double(12.0).to_string(), "12.0");
        assert_eq!(SqlValue::Float(1.5).to_string(), "1.5");
        assert_eq!(SqlValue::Integer(12).to_string(), "12");
        assert_eq!(SqlValue::Null.to_string(), "NULL");
    }
}
