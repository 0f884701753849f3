//! Procedural macros for describing record types to the mapper
//!
//! This crate provides the `#[record]` macro and `Record` derive, which generate the
//! static field descriptor table and the by-name field accessors.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod parsing;
mod record_attribute;
mod record_generation;

use parsing::parse_record_fields;
use record_attribute::record_attribute;
use record_generation::generate_record_impl;

/// Derive macro for the Record trait
///
/// Field attributes:
/// - `#[column(name = "usr_id")]` maps the field to a differently named column
/// - `#[column(kind = "DateTime")]` forces the field kind, for type aliases the
///   type-based inference cannot see through
/// - `#[transient]` keeps the field out of every mapping
///
/// ```ignore
/// use rowmap::Record;
///
/// #[derive(Default, Record)]
/// pub struct User {
///     #[column(name = "usr_id")]
///     pub id: i32,
///     pub name: String,
///     pub last_login: Option<chrono::NaiveDateTime>,
///     #[transient]
///     pub session: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(column, transient))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let fields = match parse_record_fields(&input.data) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    TokenStream::from(generate_record_impl(
        &input.ident,
        &input.generics,
        &fields,
    ))
}

/// Convenience attribute macro adding `Debug`, `Clone`, `Default` and `Record` derives
///
/// Usage:
/// ```ignore
/// use rowmap::record;
///
/// #[record]
/// pub struct User {
///     pub id: i32,
///     pub name: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn record(attr: TokenStream, item: TokenStream) -> TokenStream {
    record_attribute(attr, item)
}
