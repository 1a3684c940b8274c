use syn::{meta::ParseNestedMeta, parse_quote, Attribute, Path};

use crate::commons;

/// Item-level options, written as `#[di(paramdi_path = path::to::paramdi)]`.
pub(crate) struct ItemAttribute {
    pub(crate) paramdi_path: Path,
}

impl ItemAttribute {
    /// Removes every `#[di(...)]` from `attrs` and parses them together.
    pub(crate) fn take_from(attrs: &mut Vec<Attribute>) -> syn::Result<Self> {
        let mut paramdi_path: Option<Path> = None;
        let mut errors = Vec::new();
        let mut kept = Vec::with_capacity(attrs.len());

        for attr in attrs.drain(..) {
            if !attr.path().is_ident("di") {
                kept.push(attr);
                continue;
            }

            let parsed = attr.parse_nested_meta(|meta| parse_one(meta, &mut paramdi_path));

            if let Err(e) = parsed {
                errors.push(e);
            }
        }

        *attrs = kept;

        if let Some(e) = commons::combine_errors(errors) {
            return Err(e);
        }

        Ok(Self {
            paramdi_path: paramdi_path.unwrap_or_else(|| parse_quote!(::paramdi)),
        })
    }
}

fn parse_one(meta: ParseNestedMeta<'_>, paramdi_path: &mut Option<Path>) -> syn::Result<()> {
    if !meta.path.is_ident("paramdi_path") {
        return Err(meta.error("unknown argument, expected `paramdi_path`"));
    }

    if paramdi_path.is_some() {
        return Err(meta.error("`paramdi_path` is set more than once"));
    }

    *paramdi_path = Some(meta.value()?.call(Path::parse_mod_style)?);
    Ok(())
}
