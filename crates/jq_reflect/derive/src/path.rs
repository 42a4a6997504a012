//! This independent module is used to provide the required paths.
//! So as to minimize changes when the `jq_reflect` structure is modified.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `jq_reflect` crate.
///
/// 1. For crates that depend on `jq_reflect`, `::jq_reflect` is returned.
/// 2. For crates that depend on `jq_core`, `::jq_core::reflect` is returned.
/// 3. For crates that depend on `jq`, `::jq::reflect` is returned.
/// 4. Otherwise `::jq_reflect` is returned, which may be incorrect.
///
/// Reading the manifest is relatively expensive, the path is resolved once
/// per derive and passed around.
pub(crate) fn jq_reflect() -> syn::Path {
    jq_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jq_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline]
pub(crate) fn reflect_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::Reflect
    }
}

#[inline]
pub(crate) fn from_reflect_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::FromReflect
    }
}

#[inline]
pub(crate) fn struct_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::ops::Struct
    }
}

#[inline]
pub(crate) fn reflect_ref_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::ops::ReflectRef
    }
}

#[inline]
pub(crate) fn reflect_mut_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::ops::ReflectMut
    }
}

#[inline]
pub(crate) fn reflect_kind_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::info::ReflectKind
    }
}

#[inline]
pub(crate) fn named_field_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::info::NamedField
    }
}

#[inline]
pub(crate) fn impls_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::impls
    }
}

#[inline]
pub(crate) fn box_(jq_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jq_reflect_path::__macro_exports::Box
    }
}
