use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Fields, ItemStruct};

use crate::{commons, paramdi_path_attribute::ItemAttribute};

// #[Injectable]
// struct A {
//     b: B,
//     c: C,
// }
//
// parameters: [B, C]
// construct:  A { b: args.take::<B>()?, c: args.take::<C>()? }

pub(crate) fn generate(mut item_struct: ItemStruct) -> syn::Result<TokenStream> {
    let ItemAttribute { paramdi_path } = ItemAttribute::take_from(&mut item_struct.attrs)?;

    let field_attr_errors = item_struct
        .fields
        .iter()
        .flat_map(|field| &field.attrs)
        .filter(|attr| attr.path().is_ident("di"))
        .map(|attr| syn::Error::new(attr.span(), "`#[di]` is not supported on fields"));

    if let Some(e) = commons::combine_errors(field_attr_errors) {
        return Err(e);
    }

    let parameter_types =
        commons::check_parameter_types(item_struct.fields.iter().map(|field| &field.ty))?;
    let takes = commons::generate_takes(&parameter_types);

    let struct_ident = &item_struct.ident;
    let (_, ty_generics, _) = item_struct.generics.split_for_impl();

    let instance = match &item_struct.fields {
        Fields::Unit => quote! {
            #struct_ident
        },
        Fields::Named(fields) => {
            let idents = fields.named.iter().map(|field| &field.ident);

            quote! {
                #struct_ident {
                    #(
                        #idents: #takes,
                    )*
                }
            }
        }
        Fields::Unnamed(_) => quote! {
            #struct_ident(
                #(
                    #takes,
                )*
            )
        },
    };

    let injectable_impl = commons::generate_injectable_impl(
        &paramdi_path,
        quote!(#struct_ident #ty_generics),
        &item_struct.generics,
        &parameter_types,
        instance,
    );

    Ok(quote! {
        #item_struct

        #injectable_impl
    })
}
