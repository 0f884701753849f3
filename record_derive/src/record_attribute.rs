use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Error};

/// Convenience attribute macro that adds all necessary derives for a record type
///
/// Usage:
/// ```ignore
/// use rowmap::record;
///
/// #[record]
/// pub struct User {
///     #[column(name = "usr_id")]
///     pub id: i32,
///     pub name: String,
/// }
/// ```
pub fn record_attribute(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    if !matches!(input.data, Data::Struct(_)) {
        return Error::new_spanned(&input.ident, "record can only be used on structs")
            .to_compile_error()
            .into();
    }

    let expanded = quote! {
        #[derive(Debug, Clone, Default, ::rowmap::Record)]
        #input
    };

    TokenStream::from(expanded)
}
