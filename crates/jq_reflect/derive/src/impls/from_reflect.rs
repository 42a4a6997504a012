use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::derive_data::ReflectMeta;

/// Generates the `FromReflect` implementation.
///
/// With the `default` flag, `default_value` returns `Default::default()` so
/// lists of the type can grow.
pub(crate) fn impl_trait_from_reflect(meta: &ReflectMeta, field_types: &[&Type]) -> TokenStream {
    let from_reflect_ = crate::path::from_reflect_(meta.jq_reflect_path());

    let default_tokens = meta.attrs().default.map(|_| {
        quote! {
            #[inline]
            fn default_value() -> ::core::option::Option<Self> {
                ::core::option::Option::Some(::core::default::Default::default())
            }
        }
    });

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(field_types);

    quote! {
        impl #impl_generics #from_reflect_ for #ident #ty_generics #where_clause {
            #default_tokens
        }
    }
}
