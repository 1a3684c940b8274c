use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{spanned::Spanned, Generics, Path, Type};

/// Folds a list of errors into one, `None` if the list is empty.
pub(crate) fn combine_errors<I>(errors: I) -> Option<syn::Error>
where
    I: IntoIterator<Item = syn::Error>,
{
    errors.into_iter().reduce(|mut a, b| {
        a.combine(b);
        a
    })
}

/// Rejects parameter types the resolver can never hand out.
pub(crate) fn check_parameter_type(ty: &Type) -> syn::Result<()> {
    match ty {
        Type::Reference(ty) => Err(syn::Error::new(
            ty.span(),
            "not support reference type, every parameter is resolved into an owned value",
        )),
        Type::ImplTrait(ty) => Err(syn::Error::new(
            ty.span(),
            "not support `impl Trait` type, please use a concrete type",
        )),
        Type::Infer(ty) => Err(syn::Error::new(
            ty.span(),
            "not support `_` type, please write the parameter type out",
        )),
        Type::Paren(paren) => check_parameter_type(&paren.elem),
        Type::Group(group) => check_parameter_type(&group.elem),
        _ => Ok(()),
    }
}

/// Collects every parameter type, reporting all rejected ones together.
pub(crate) fn check_parameter_types<'a, I>(types: I) -> syn::Result<Vec<&'a Type>>
where
    I: IntoIterator<Item = &'a Type>,
{
    let mut checked = Vec::new();
    let mut errors = Vec::new();

    for ty in types {
        match check_parameter_type(ty) {
            Ok(()) => checked.push(ty),
            Err(e) => errors.push(e),
        }
    }

    match combine_errors(errors) {
        Some(e) => Err(e),
        None => Ok(checked),
    }
}

/// Generates `impl Injectable for ...`.
///
/// `instance` is an expression of type `Self` that may use `args`, a
/// `&mut Arguments`, to take each parameter in order. Every type parameter
/// gets a `'static` bound, which `Injectable` requires.
pub(crate) fn generate_injectable_impl(
    paramdi_path: &Path,
    self_ty: impl ToTokens,
    generics: &Generics,
    parameter_types: &[&Type],
    instance: TokenStream,
) -> TokenStream {
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let static_bounds = generics.type_params().map(|param| {
        let ident = &param.ident;
        quote!(#ident: 'static)
    });
    let predicates = where_clause.map(|where_clause| &where_clause.predicates);

    quote! {
        impl #impl_generics #paramdi_path::Injectable for #self_ty
        where
            #(#static_bounds,)*
            #predicates
        {
            fn parameters() -> ::core::option::Option<::std::vec::Vec<#paramdi_path::Type>> {
                ::core::option::Option::Some(::std::vec![
                    #(
                        #paramdi_path::Type::of::<#parameter_types>(),
                    )*
                ])
            }

            #[allow(unused_variables)]
            fn construct(
                args: &mut #paramdi_path::Arguments,
            ) -> ::core::result::Result<Self, #paramdi_path::ConstructError> {
                ::core::result::Result::Ok(#instance)
            }
        }
    }
}

/// `args.take::<T>()?`, one per parameter type.
pub(crate) fn generate_takes(parameter_types: &[&Type]) -> Vec<TokenStream> {
    parameter_types
        .iter()
        .map(|ty| quote!(args.take::<#ty>()?))
        .collect()
}

#[cfg(test)]
mod tests {
    use syn::{parse_quote, ItemImpl};

    use super::*;

    fn injectable_impl(generics: &Generics) -> ItemImpl {
        let paramdi_path: Path = parse_quote!(::paramdi);
        let tokens =
            generate_injectable_impl(&paramdi_path, quote!(Holder), generics, &[], quote!(Holder));

        syn::parse2(tokens).unwrap()
    }

    #[test]
    fn type_parameters_are_static() {
        let generics: Generics = parse_quote!(<T, U: Clone>);

        let predicates = injectable_impl(&generics).generics.where_clause.unwrap().predicates;

        let expected: [syn::WherePredicate; 2] = [
            parse_quote!(T: 'static),
            parse_quote!(U: 'static),
        ];
        assert_eq!(predicates.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn existing_predicates_are_kept() {
        let mut generics: Generics = parse_quote!(<T>);
        generics.where_clause = Some(parse_quote!(where T: Default));

        let predicates = injectable_impl(&generics).generics.where_clause.unwrap().predicates;

        let expected: [syn::WherePredicate; 2] = [
            parse_quote!(T: 'static),
            parse_quote!(T: Default),
        ];
        assert_eq!(predicates.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn no_generics() {
        let where_clause = injectable_impl(&Generics::default()).generics.where_clause;

        assert!(where_clause.map_or(true, |w| w.predicates.is_empty()));
    }
}
