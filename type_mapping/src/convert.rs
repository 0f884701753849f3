//! Conversions between SqlValue and Rust field types
//!
//! `FromSqlValue` is the assignment side (cell value into field) and `ToSqlValue`
//! the read side (field into value). Integer conversions widen freely and narrow
//! only when the value fits.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::errors::CoercionError;
use crate::types::SqlValue;

/// Extract a typed field value from a SqlValue
///
/// ```rust
/// use type_mapping::{FromSqlValue, SqlValue};
///
/// assert_eq!(i64::from_sql_value(SqlValue::Integer(42)).unwrap(), 42);
/// assert_eq!(Option::<i32>::from_sql_value(SqlValue::Null).unwrap(), None);
/// assert!(i32::from_sql_value(SqlValue::Null).is_err());
/// ```
pub trait FromSqlValue: Sized {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError>;
}

/// Read a field's current value as a SqlValue
///
/// Implemented for every `Clone` type with an `Into<SqlValue>` conversion, so a
/// custom field type only needs `From<MyType> for SqlValue`.
pub trait ToSqlValue {
    fn to_sql_value(&self) -> SqlValue;
}

impl<T> ToSqlValue for T
where
    T: Clone + Into<SqlValue>,
{
    fn to_sql_value(&self) -> SqlValue {
        self.clone().into()
    }
}

macro_rules! impl_from_sql_integer {
    ($type:ty, $expected:expr) => {
        impl FromSqlValue for $type {
            fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
                let overflow = |value: &dyn std::fmt::Display| CoercionError::Overflow {
                    value: value.to_string(),
                    target: $expected,
                };
                match value {
                    SqlValue::TinyInt(v) => <$type>::try_from(v).map_err(|_| overflow(&v)),
                    SqlValue::SmallInt(v) => <$type>::try_from(v).map_err(|_| overflow(&v)),
                    SqlValue::Integer(v) => <$type>::try_from(v).map_err(|_| overflow(&v)),
                    SqlValue::BigInt(v) => <$type>::try_from(v).map_err(|_| overflow(&v)),
                    SqlValue::Null => Err(CoercionError::NullValue),
                    other => Err(CoercionError::mismatch($expected, &other)),
                }
            }
        }
    };
}

impl_from_sql_integer!(i8, "TinyInt");
impl_from_sql_integer!(i16, "SmallInt");
impl_from_sql_integer!(i32, "Integer");
impl_from_sql_integer!(i64, "BigInt");

impl FromSqlValue for f64 {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Double(v) => Ok(v),
            SqlValue::Float(v) => Ok(f64::from(v)),
            SqlValue::TinyInt(v) => Ok(f64::from(v)),
            SqlValue::SmallInt(v) => Ok(f64::from(v)),
            SqlValue::Integer(v) => Ok(f64::from(v)),
            SqlValue::BigInt(v) => Ok(v as f64),
            SqlValue::Null => Err(CoercionError::NullValue),
            other => Err(CoercionError::mismatch("Double", &other)),
        }
    }
}

impl FromSqlValue for f32 {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Float(v) => Ok(v),
            SqlValue::Double(v) => Ok(v as f32),
            SqlValue::TinyInt(v) => Ok(f32::from(v)),
            SqlValue::SmallInt(v) => Ok(f32::from(v)),
            SqlValue::Integer(v) => Ok(v as f32),
            SqlValue::BigInt(v) => Ok(v as f32),
            SqlValue::Null => Err(CoercionError::NullValue),
            other => Err(CoercionError::mismatch("Float", &other)),
        }
    }
}

impl FromSqlValue for bool {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Boolean(v) => Ok(v),
            SqlValue::TinyInt(v) => Ok(v != 0),
            SqlValue::SmallInt(v) => Ok(v != 0),
            SqlValue::Integer(v) => Ok(v != 0),
            SqlValue::BigInt(v) => Ok(v != 0),
            SqlValue::Null => Err(CoercionError::NullValue),
            other => Err(CoercionError::mismatch("Boolean", &other)),
        }
    }
}

/// Any non-null value reads as its plain string form
impl FromSqlValue for String {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Text(v) => Ok(v),
            SqlValue::Null => Err(CoercionError::NullValue),
            other => Ok(other.to_string()),
        }
    }
}

/// First character of a text value; an empty string is an error
impl FromSqlValue for char {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Char(v) => Ok(v),
            SqlValue::Text(v) => v.chars().next().ok_or(CoercionError::EmptyCharacter),
            SqlValue::Null => Err(CoercionError::NullValue),
            other => Err(CoercionError::mismatch("Char", &other)),
        }
    }
}

impl FromSqlValue for NaiveDate {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Null => Err(CoercionError::NullValue),
            other => other
                .as_naive_date()
                .ok_or_else(|| CoercionError::mismatch("Date", &other)),
        }
    }
}

impl FromSqlValue for NaiveDateTime {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Null => Err(CoercionError::NullValue),
            other => other
                .as_naive_date_time()
                .ok_or_else(|| CoercionError::mismatch("DateTime", &other)),
        }
    }
}

impl FromSqlValue for DateTime<Utc> {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Timestamp(v) => Ok(v),
            SqlValue::Null => Err(CoercionError::NullValue),
            other => other
                .as_naive_date_time()
                .map(|naive| naive.and_utc())
                .ok_or_else(|| CoercionError::mismatch("Timestamp", &other)),
        }
    }
}

impl FromSqlValue for Uuid {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Uuid(v) => Ok(v),
            SqlValue::Text(v) => {
                Uuid::parse_str(&v).map_err(|e| CoercionError::Conversion(e.to_string()))
            }
            SqlValue::Null => Err(CoercionError::NullValue),
            other => Err(CoercionError::mismatch("Uuid", &other)),
        }
    }
}

impl FromSqlValue for serde_json::Value {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Json(v) => Ok(v),
            SqlValue::Null => Err(CoercionError::NullValue),
            other => Err(CoercionError::mismatch("Json", &other)),
        }
    }
}

/// Passthrough for opaque fields that keep the driver's native value
impl FromSqlValue for SqlValue {
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        Ok(value)
    }
}

impl<T> FromSqlValue for Option<T>
where
    T: FromSqlValue,
{
    fn from_sql_value(value: SqlValue) -> Result<Self, CoercionError> {
        match value {
            SqlValue::Null => Ok(None),
            other => T::from_sql_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widening_and_narrowing() {
        assert_eq!(i64::from_sql_value(SqlValue::Integer(7)).unwrap(), 7);
        assert_eq!(i16::from_sql_value(SqlValue::BigInt(300)).unwrap(), 300);
        assert!(matches!(
            i8::from_sql_value(SqlValue::Integer(300)),
            Err(CoercionError::Overflow { target: "TinyInt", .. })
        ));
    }

    #[test]
    fn test_null_handling() {
        assert!(matches!(
            i32::from_sql_value(SqlValue::Null),
            Err(CoercionError::NullValue)
        ));
        assert_eq!(Option::<String>::from_sql_value(SqlValue::Null).unwrap(), None);
        assert_eq!(
            Option::<String>::from_sql_value(SqlValue::Text("x".into())).unwrap(),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_char_from_text() {
        assert_eq!(char::from_sql_value(SqlValue::Text("Yes".into())).unwrap(), 'Y');
        assert!(matches!(
            char::from_sql_value(SqlValue::Text(String::new())),
            Err(CoercionError::EmptyCharacter)
        ));
    }

    #[test]
    fn test_string_reads_any_value() {
        assert_eq!(String::from_sql_value(SqlValue::Integer(5)).unwrap(), "5");
        assert_eq!(String::from_sql_value(SqlValue::Boolean(true)).unwrap(), "true");
    }

    #[test]
    fn test_temporal_conversions() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let date_time = date.and_hms_opt(10, 15, 0).unwrap();

        assert_eq!(
            NaiveDate::from_sql_value(SqlValue::DateTime(date_time)).unwrap(),
            date
        );
        assert_eq!(
            NaiveDateTime::from_sql_value(SqlValue::Timestamp(date_time.and_utc())).unwrap(),
            date_time
        );
        assert!(NaiveDate::from_sql_value(SqlValue::Text("2024-03-05".into())).is_err());
    }

    #[test]
    fn test_type_mismatch_reports_both_sides() {
        match bool::from_sql_value(SqlValue::Text("yes".into())) {
            Err(CoercionError::TypeMismatch { expected, actual }) => {
                assert_eq!(expected, "Boolean");
                assert_eq!(actual, "Text");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_to_sql_value() {
        assert_eq!(42i32.to_sql_value(), SqlValue::Integer(42));
        assert_eq!(Some('c').to_sql_value(), SqlValue::Char('c'));
        assert_eq!(None::<i64>.to_sql_value(), SqlValue::Null);
        assert_eq!("Alice".to_string().to_sql_value(), SqlValue::Text("Alice".into()));
    }
}
