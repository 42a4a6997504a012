use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::trait_reflect::{debug_by_trait, partial_eq_by_trait};
use super::{impl_trait_from_reflect, impl_trait_reflect};

use crate::derive_data::ReflectMeta;

/// Implement `Reflect` and `FromReflect` for `#[reflect(opaque)]` types.
///
/// Without `partial_eq` the comparison is unknown, without `debug` the value
/// prints its type path.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let partial_eq_tokens = if meta.attrs().partial_eq.is_some() {
        partial_eq_by_trait(meta)
    } else {
        TokenStream::new()
    };
    let debug_tokens = if meta.attrs().debug.is_some() {
        debug_by_trait()
    } else {
        TokenStream::new()
    };

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        &[],
        Ident::new("Opaque", Span::call_site()),
        partial_eq_tokens,
        debug_tokens,
    );
    let from_reflect_tokens = impl_trait_from_reflect(meta, &[]);

    quote! {
        #reflect_trait_tokens

        #from_reflect_tokens
    }
}

/// Implement `Reflect` and `FromReflect` for unit structs.
///
/// All values of a unit struct are equal, and print as the type name.
pub(crate) fn impl_unit(meta: &ReflectMeta) -> TokenStream {
    let reflect_ = crate::path::reflect_(meta.jq_reflect_path());

    let partial_eq_tokens = if meta.attrs().partial_eq.is_some() {
        partial_eq_by_trait(meta)
    } else {
        quote! {
            #[inline]
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(<dyn #reflect_>::is::<Self>(other))
            }
        }
    };
    let debug_tokens = if meta.attrs().debug.is_some() {
        debug_by_trait()
    } else {
        let name = meta.ident().to_string();
        quote! {
            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#name)
            }
        }
    };

    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        &[],
        Ident::new("Opaque", Span::call_site()),
        partial_eq_tokens,
        debug_tokens,
    );
    let from_reflect_tokens = impl_trait_from_reflect(meta, &[]);

    quote! {
        #reflect_trait_tokens

        #from_reflect_tokens
    }
}
