//! Trait definitions
//!
//! This module defines the metadata and accessors a record type exposes.

use type_mapping::{FieldKind, SqlValue};

use crate::errors::FieldAccessError;

/// Static description of one declared field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field's identifier
    pub name: &'static str,
    /// Column the field maps to; the identifier unless overridden
    pub column: &'static str,
    pub kind: FieldKind,
    /// Declared as `Option<T>`
    pub nullable: bool,
    /// `false` for fields that never map to a column
    pub persistent: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column: name,
            kind,
            nullable: false,
            persistent: true,
        }
    }

    pub const fn column(mut self, column: &'static str) -> Self {
        self.column = column;
        self
    }

    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub const fn transient(mut self) -> Self {
        self.persistent = false;
        self
    }
}

/// Field metadata and accessors for a record type
/// This trait should be derived using `#[derive(Record)]` or the `#[record]`
/// attribute macro.
///
/// Recommended usage:
/// ```ignore
/// use rowmap::prelude::*;
///
/// #[record]
/// pub struct User {
///     #[column(name = "usr_id")]
///     pub id: i32,
///     pub name: String,
///     pub active: bool,
///     #[transient]
///     pub cached_label: String,
/// }
/// ```
///
/// Manual usage, with a static descriptor table:
/// ```
/// use record_mapper::{FieldAccessError, FieldDescriptor, Record};
/// use type_mapping::{FieldKind, FromSqlValue, SqlValue, ToSqlValue};
///
/// #[derive(Default)]
/// struct Tag {
///     id: i64,
///     label: Option<String>,
/// }
///
/// static TAG_FIELDS: [FieldDescriptor; 2] = [
///     FieldDescriptor::new("id", FieldKind::Int64),
///     FieldDescriptor::new("label", FieldKind::Text).column("tag_label").nullable(),
/// ];
///
/// impl Record for Tag {
///     fn field_descriptors() -> &'static [FieldDescriptor] {
///         &TAG_FIELDS
///     }
///
///     fn get_field(&self, field: &str) -> Result<SqlValue, FieldAccessError> {
///         match field {
///             "id" => Ok(self.id.to_sql_value()),
///             "label" => Ok(self.label.to_sql_value()),
///             _ => Err(FieldAccessError::UnknownField(field.to_string())),
///         }
///     }
///
///     fn set_field(&mut self, field: &str, value: SqlValue) -> Result<(), FieldAccessError> {
///         match field {
///             "id" => self.id = FromSqlValue::from_sql_value(value)
///                 .map_err(|e| FieldAccessError::coercion("id", e))?,
///             "label" => self.label = FromSqlValue::from_sql_value(value)
///                 .map_err(|e| FieldAccessError::coercion("label", e))?,
///             _ => return Err(FieldAccessError::UnknownField(field.to_string())),
///         }
///         Ok(())
///     }
/// }
///
/// assert_eq!(Tag::field_descriptors()[1].column, "tag_label");
/// ```
pub trait Record {
    /// All declared fields in declaration order, transient ones included
    fn field_descriptors() -> &'static [FieldDescriptor];

    /// Current value of a persistent field
    fn get_field(&self, field: &str) -> Result<SqlValue, FieldAccessError>;

    /// Assign a value to a persistent field
    fn set_field(&mut self, field: &str, value: SqlValue) -> Result<(), FieldAccessError>;
}
