//! Code generation for the `Record` impl
//!
//! Emits the static descriptor table and the by-name field accessors. Transient
//! fields get a descriptor but no accessor arms, so their types need no conversions.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Generics, Ident};

use crate::parsing::RecordField;

fn descriptor(field: &RecordField) -> TokenStream {
    let name = field.name();
    let column = &field.column;
    let kind = format_ident!("{}", field.kind.variant_name());

    let mut tokens = quote! {
        ::rowmap::record_mapper::FieldDescriptor::new(
            #name,
            ::rowmap::type_mapping::FieldKind::#kind,
        )
    };
    if *column != name {
        tokens = quote! { #tokens.column(#column) };
    }
    if field.nullable {
        tokens = quote! { #tokens.nullable() };
    }
    if field.transient {
        tokens = quote! { #tokens.transient() };
    }
    tokens
}

pub fn generate_record_impl(
    name: &Ident,
    generics: &Generics,
    fields: &[RecordField],
) -> TokenStream {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_count = fields.len();
    let descriptors = fields.iter().map(descriptor);

    let persistent: Vec<_> = fields.iter().filter(|field| !field.transient).collect();
    let get_arms = persistent.iter().map(|field| {
        let ident = &field.ident;
        let name = field.name();
        quote! {
            #name => ::std::result::Result::Ok(
                ::rowmap::type_mapping::ToSqlValue::to_sql_value(&self.#ident)
            ),
        }
    });
    let set_arms = persistent.iter().map(|field| {
        let ident = &field.ident;
        let name = field.name();
        quote! {
            #name => {
                self.#ident = ::rowmap::type_mapping::FromSqlValue::from_sql_value(value)
                    .map_err(|e| ::rowmap::record_mapper::FieldAccessError::coercion(#name, e))?;
                ::std::result::Result::Ok(())
            }
        }
    });

    quote! {
        impl #impl_generics ::rowmap::record_mapper::Record for #name #ty_generics #where_clause {
            fn field_descriptors() -> &'static [::rowmap::record_mapper::FieldDescriptor] {
                static FIELDS: [::rowmap::record_mapper::FieldDescriptor; #field_count] = [
                    #(#descriptors),*
                ];
                &FIELDS
            }

            fn get_field(
                &self,
                field: &str,
            ) -> ::std::result::Result<
                ::rowmap::type_mapping::SqlValue,
                ::rowmap::record_mapper::FieldAccessError,
            > {
                match field {
                    #(#get_arms)*
                    _ => ::std::result::Result::Err(
                        ::rowmap::record_mapper::FieldAccessError::UnknownField(field.to_string()),
                    ),
                }
            }

            #[allow(unused_variables)]
            fn set_field(
                &mut self,
                field: &str,
                value: ::rowmap::type_mapping::SqlValue,
            ) -> ::std::result::Result<(), ::rowmap::record_mapper::FieldAccessError> {
                match field {
                    #(#set_arms)*
                    _ => ::std::result::Result::Err(
                        ::rowmap::record_mapper::FieldAccessError::UnknownField(field.to_string()),
                    ),
                }
            }
        }
    }
}
