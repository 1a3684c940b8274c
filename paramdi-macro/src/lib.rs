mod commons;
mod item_impl_gen;
mod item_struct_gen;
mod paramdi_path_attribute;

use proc_macro::TokenStream;
use syn::{parse::Nothing, parse_macro_input, spanned::Spanned, Item};

#[proc_macro_attribute]
#[allow(non_snake_case)]
pub fn Injectable(attr: TokenStream, input: TokenStream) -> TokenStream {
    parse_macro_input!(attr as Nothing);
    let item = parse_macro_input!(input as Item);

    let result = match item {
        Item::Struct(item_struct) => item_struct_gen::generate(item_struct),
        Item::Impl(item_impl) => item_impl_gen::generate(item_impl),
        _ => Err(syn::Error::new(item.span(), "expected struct or impl")),
    };

    result.unwrap_or_else(|e| e.to_compile_error()).into()
}
