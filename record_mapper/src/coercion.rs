//! Cell coercion
//!
//! Reads the cell bound to a field through the result set accessor matching the
//! field's kind.

use type_mapping::{FieldKind, SqlValue};

use crate::errors::{DriverError, MapperError};
use crate::resolver::FieldBinding;
use crate::result_set::ResultSet;

/// Read the current row's cell for `binding`
///
/// Character fields take the first character of the string cell; an empty string is
/// an error. Date-time and opaque fields get the driver's native value. A NULL cell
/// bound to a non-optional numeric or boolean field reads as zero or `false`.
pub fn read_cell<R: ResultSet + ?Sized>(
    result_set: &R,
    binding: &FieldBinding,
) -> Result<SqlValue, MapperError> {
    let column = binding.label.as_str();
    let cell_error = |source: DriverError| MapperError::CellRead {
        field: binding.name(),
        column: column.to_string(),
        source,
    };

    let value = match binding.kind() {
        FieldKind::Int32 => result_set.get_i32(column).map(SqlValue::from),
        FieldKind::Int64 => result_set.get_i64(column).map(SqlValue::from),
        FieldKind::Text => result_set.get_string(column).map(SqlValue::from),
        FieldKind::Boolean => result_set.get_bool(column).map(SqlValue::from),
        FieldKind::Float64 => result_set.get_f64(column).map(SqlValue::from),
        FieldKind::Float32 => result_set.get_f32(column).map(SqlValue::from),
        FieldKind::Byte => result_set.get_i8(column).map(SqlValue::from),
        FieldKind::Short => result_set.get_i16(column).map(SqlValue::from),
        FieldKind::Date => result_set.get_date(column).map(SqlValue::from),
        FieldKind::Char => {
            return match result_set.get_string(column).map_err(cell_error)? {
                None => Ok(SqlValue::Null),
                Some(text) => text.chars().next().map(SqlValue::Char).ok_or_else(|| {
                    MapperError::EmptyCharacter {
                        field: binding.name(),
                        column: column.to_string(),
                    }
                }),
            };
        }
        FieldKind::DateTime | FieldKind::Opaque => result_set.get_object(column),
    };

    let value = value.map_err(cell_error)?;
    if value.is_null() && !binding.field.nullable {
        if let Some(zero) = binding.kind().zero_value() {
            return Ok(zero);
        }
    }
    Ok(value)
}
