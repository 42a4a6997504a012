use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::Type;

use crate::derive_data::ReflectMeta;

/// Generates the `Reflect` implementation.
///
/// `kind` is the `ReflectKind` variant, `partial_eq_tokens` and `debug_tokens`
/// are inserted as is and may be empty to keep the trait defaults.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    field_types: &[&Type],
    kind: Ident,
    partial_eq_tokens: TokenStream,
    debug_tokens: TokenStream,
) -> TokenStream {
    let jq_reflect_path = meta.jq_reflect_path();
    let reflect_ = crate::path::reflect_(jq_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(jq_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(jq_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(jq_reflect_path);
    let box_ = crate::path::box_(jq_reflect_path);

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(field_types);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            fn set(
                &mut self,
                value: #box_<dyn #reflect_>,
            ) -> ::core::result::Result<(), #box_<dyn #reflect_>> {
                *self = <dyn #reflect_>::take::<Self>(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#kind(self)
            }

            #[inline]
            fn reflect_clone(&self) -> #box_<dyn #reflect_> {
                #box_::new(::core::clone::Clone::clone(self))
            }

            #partial_eq_tokens

            #debug_tokens
        }
    }
}

/// `reflect_partial_eq` through the type's `PartialEq`.
pub(crate) fn partial_eq_by_trait(meta: &ReflectMeta) -> TokenStream {
    let reflect_ = crate::path::reflect_(meta.jq_reflect_path());
    quote! {
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
            ::core::option::Option::Some(
                <dyn #reflect_>::downcast_ref::<Self>(other)
                    .is_some_and(|other| ::core::cmp::PartialEq::eq(self, other)),
            )
        }
    }
}

/// `reflect_debug` through the type's `Debug`.
pub(crate) fn debug_by_trait() -> TokenStream {
    quote! {
        #[inline]
        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    }
}
