//! Parsing utilities for record field attributes
//!
//! This module handles the parsing of `#[column]` and `#[transient]` attributes
//! and validation of column names.

use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, Error, Fields, Ident, LitStr, Result, Type};
use type_mapping::{is_optional_type, rust_type_to_field_kind, FieldKind};

/// Validate a column override and return syn::Error for better proc macro error handling
pub fn validate_column_name_syn(name: &str, span: proc_macro2::Span) -> Result<()> {
    validate_identifier(name)
        .map_err(|e| Error::new(span, format!("Invalid column name '{}': {}", name, e)))
}

fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if name.len() > 63 {
        return Err(format!(
            "Name '{}' is too long: {} characters (max 63)",
            name,
            name.len()
        ));
    }

    let first_char = name
        .chars()
        .next()
        .ok_or_else(|| "Name cannot be empty".to_string())?;
    if !first_char.is_ascii_alphabetic() && first_char != '_' {
        return Err(format!(
            "Name '{}' must start with a letter or underscore",
            name
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("Name '{}' contains invalid characters: only alphanumeric characters and underscores are allowed", name));
    }

    Ok(())
}

/// One named field of the deriving struct
#[derive(Debug)]
pub struct RecordField {
    pub ident: Ident,
    pub column: String,
    pub kind: FieldKind,
    pub nullable: bool,
    pub transient: bool,
}

impl RecordField {
    /// Identifier without a raw `r#` prefix
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

#[derive(Debug, Default)]
struct ColumnAttribute {
    name: Option<LitStr>,
    kind: Option<LitStr>,
}

fn parse_column_attribute(attrs: &[Attribute]) -> Result<ColumnAttribute> {
    let mut column = ColumnAttribute::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("column")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                column.name = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("kind") {
                column.kind = Some(meta.value()?.parse()?);
                Ok(())
            } else {
                Err(meta.error("unsupported column attribute, expected `name` or `kind`"))
            }
        })?;
    }

    Ok(column)
}

fn field_kind(ty: &Type, override_kind: Option<&LitStr>) -> Result<FieldKind> {
    let type_string = quote!(#ty).to_string();

    match override_kind {
        Some(lit) => FieldKind::from_variant_name(&lit.value()).ok_or_else(|| {
            let known: Vec<_> = FieldKind::ALL.iter().map(|kind| kind.variant_name()).collect();
            Error::new(
                lit.span(),
                format!(
                    "Unknown field kind '{}', expected one of: {}",
                    lit.value(),
                    known.join(", ")
                ),
            )
        }),
        None => Ok(rust_type_to_field_kind(&type_string)),
    }
}

pub fn parse_record_fields(data: &Data) -> Result<Vec<RecordField>> {
    if let Data::Struct(data_struct) = data {
        if let Fields::Named(fields_named) = &data_struct.fields {
            let mut fields = Vec::with_capacity(fields_named.named.len());

            for field in &fields_named.named {
                let ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| Error::new_spanned(field, "Field must have a name"))?;

                let attribute = parse_column_attribute(&field.attrs)?;
                let column = match &attribute.name {
                    Some(lit) => {
                        validate_column_name_syn(&lit.value(), lit.span())?;
                        lit.value()
                    }
                    None => ident.unraw().to_string(),
                };

                let ty = &field.ty;
                let type_string = quote!(#ty).to_string();

                fields.push(RecordField {
                    kind: field_kind(ty, attribute.kind.as_ref())?,
                    nullable: is_optional_type(&type_string),
                    transient: has_attribute(&field.attrs, "transient"),
                    column,
                    ident,
                });
            }

            return Ok(fields);
        }
    }

    Err(Error::new(
        proc_macro2::Span::call_site(),
        "Record can only be derived for structs with named fields",
    ))
}

pub fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
