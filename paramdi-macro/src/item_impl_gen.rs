use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{
    spanned::Spanned, Attribute, FnArg, ImplItem, ImplItemFn, ItemImpl, Path, PatType, ReturnType,
    Type, TypePath,
};

use crate::{commons, paramdi_path_attribute::ItemAttribute};

// struct A {
//     b: B,
// }
//
// #[Injectable]
// impl A {
//     #[di]
//     fn new(b: B) -> Self {
//         Self { b }
//     }
// }
//
// parameters: [B]
// construct:  Self::new(args.take::<B>()?)

pub(crate) fn generate(mut item_impl: ItemImpl) -> syn::Result<TokenStream> {
    let ItemAttribute { paramdi_path } = ItemAttribute::take_from(&mut item_impl.attrs)?;

    if let Some((_, path, _)) = &item_impl.trait_ {
        return Err(syn::Error::new(
            path.span(),
            "not support trait impl, please use an inherent impl",
        ));
    }

    let impl_span = item_impl.span();

    let mut marked = Vec::new();
    let mut errors = Vec::new();

    for (index, impl_item) in item_impl.items.iter_mut().enumerate() {
        let ImplItem::Fn(f) = impl_item else {
            continue;
        };

        match take_di_marker(&mut f.attrs) {
            Ok(true) => marked.push((index, f.sig.span())),
            Ok(false) => {}
            Err(e) => errors.push(e),
        }
    }

    errors.extend(
        marked
            .iter()
            .skip(1)
            .map(|(_, span)| syn::Error::new(*span, "duplicate `#[di]` function")),
    );

    if let Some(e) = commons::combine_errors(errors) {
        return Err(e);
    }

    let Some(ImplItem::Fn(f)) = marked.first().map(|(index, _)| &item_impl.items[*index]) else {
        return Err(syn::Error::new(
            impl_span,
            "there must be an associated function annotated by `#[di]`",
        ));
    };

    let fn_ident = &f.sig.ident;
    let parameter_types = constructor_parameter_types(f, &item_impl.self_ty)?;

    let parameter_types = commons::check_parameter_types(parameter_types)?;
    let takes = commons::generate_takes(&parameter_types);

    let instance = quote! {
        Self::#fn_ident(
            #(
                #takes,
            )*
        )
    };

    let injectable_impl = commons::generate_injectable_impl(
        &paramdi_path,
        &item_impl.self_ty,
        &item_impl.generics,
        &parameter_types,
        instance,
    );

    Ok(quote! {
        #item_impl

        #injectable_impl
    })
}

/// Removes a bare `#[di]` from `attrs`, returns whether there was one.
fn take_di_marker(attrs: &mut Vec<Attribute>) -> syn::Result<bool> {
    let Some(index) = attrs.iter().position(|attr| attr.path().is_ident("di")) else {
        return Ok(false);
    };

    let attr = attrs.remove(index);
    attr.meta.require_path_only()?;

    if let Some(duplicate) = attrs.iter().find(|attr| attr.path().is_ident("di")) {
        return Err(syn::Error::new(duplicate.span(), "duplicate `#[di]` attribute"));
    }

    Ok(true)
}

/// Validates the signature of the `#[di]` function and returns its argument types.
fn constructor_parameter_types<'a>(
    f: &'a ImplItemFn,
    self_ty: &Type,
) -> syn::Result<Vec<&'a Type>> {
    if let Some(asyncness) = &f.sig.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "not support async constructor",
        ));
    }

    let returns_self = match &f.sig.output {
        ReturnType::Type(_, ty) => **ty == *self_ty || is_self(ty),
        ReturnType::Default => false,
    };

    if !returns_self {
        return Err(syn::Error::new(
            f.sig.span(),
            format!(
                "return type must be `{}` or `Self`",
                self_ty.into_token_stream()
            ),
        ));
    }

    f.sig
        .inputs
        .iter()
        .map(|input| match input {
            FnArg::Receiver(r) => Err(syn::Error::new(r.span(), "not support `self` receiver")),
            FnArg::Typed(PatType { ty, .. }) => Ok(&**ty),
        })
        .collect()
}

fn is_self(ty: &Type) -> bool {
    let Type::Path(TypePath {
        qself: None,
        path: Path {
            leading_colon: None,
            segments,
        },
    }) = ty
    else {
        return false;
    };

    segments.len() == 1 && segments[0].ident == "Self" && segments[0].arguments.is_empty()
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn parameter_types_follow_argument_order() {
        let f: ImplItemFn = parse_quote! {
            fn new(ware_service: WareService, cart_service: CartService) -> Self {
                todo!()
            }
        };
        let self_ty: Type = parse_quote!(WareComponent);

        let expected: [Type; 2] = [parse_quote!(WareService), parse_quote!(CartService)];

        let types = constructor_parameter_types(&f, &self_ty).unwrap();
        assert_eq!(types, expected.iter().collect::<Vec<_>>());
    }

    #[test]
    fn returning_the_type_itself() {
        let f: ImplItemFn = parse_quote! {
            fn new() -> Holder<T> {
                todo!()
            }
        };
        let self_ty: Type = parse_quote!(Holder<T>);

        assert!(constructor_parameter_types(&f, &self_ty).unwrap().is_empty());
    }

    #[test]
    fn receiver_is_rejected() {
        let f: ImplItemFn = parse_quote! {
            fn new(self) -> Self {
                self
            }
        };
        let self_ty: Type = parse_quote!(WareComponent);

        assert!(constructor_parameter_types(&f, &self_ty).is_err());
    }

    #[test]
    fn constructor_in_the_middle_of_the_impl() {
        let item_impl: ItemImpl = parse_quote! {
            impl WareComponent {
                fn helper() -> u8 {
                    0
                }

                #[di]
                fn new(ware_service: WareService) -> Self {
                    todo!()
                }
            }
        };

        let output = generate(item_impl).unwrap();
        assert!(!output.to_string().contains("[di]"));

        let file: syn::File = syn::parse2(output).unwrap();
        assert_eq!(file.items.len(), 2);
    }

    #[test]
    fn duplicate_constructor() {
        let item_impl: ItemImpl = parse_quote! {
            impl WareComponent {
                #[di]
                fn a() -> Self {
                    todo!()
                }

                #[di]
                fn b() -> Self {
                    todo!()
                }
            }
        };

        assert!(generate(item_impl).is_err());
    }
}
