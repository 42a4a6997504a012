use proc_macro2::Span;
use syn::{Attribute, meta::ParseNestedMeta, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level `#[reflect(...)]` flags.
///
/// Each flag records the span it was declared at, for error reporting.
#[derive(Default, Debug)]
pub(crate) struct TypeAttributes {
    /// The type implements `Default`.
    pub default: Option<Span>,
    /// The type implements `PartialEq`.
    pub partial_eq: Option<Span>,
    /// The type implements `Debug`.
    pub debug: Option<Span>,
    /// Fields are not inspected.
    pub opaque: Option<Span>,
}

fn set_flag(flag: &mut Option<Span>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if flag.is_some() {
        return Err(meta.error("duplicate flag"));
    }
    *flag = Some(meta.path.span());
    Ok(())
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("default") {
                    set_flag(&mut this.default, &meta)
                } else if meta.path.is_ident("partial_eq") {
                    set_flag(&mut this.partial_eq, &meta)
                } else if meta.path.is_ident("debug") {
                    set_flag(&mut this.debug, &meta)
                } else if meta.path.is_ident("opaque") {
                    set_flag(&mut this.opaque, &meta)
                } else {
                    Err(meta.error(
                        "unknown type attribute, expected `default`, `partial_eq`, `debug` or `opaque`",
                    ))
                }
            })?;
        }

        Ok(this)
    }
}
