//! Unified type mapping between Rust field types and SQL values
//! This crate provides the coercion logic shared by the rowmap crates

pub mod convert;
pub mod errors;
pub mod sql;
pub mod types;

pub use convert::{FromSqlValue, ToSqlValue};
pub use errors::CoercionError;
pub use sql::{
    is_optional_type, rust_type_to_field_kind, rust_type_to_field_kind_variant, sql_literal,
    unwrap_optional_type, NULL_VALUE,
};
pub use types::{FieldKind, SqlValue};
