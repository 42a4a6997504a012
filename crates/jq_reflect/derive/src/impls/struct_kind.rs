use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Ident, Index};

use super::trait_reflect::{debug_by_trait, partial_eq_by_trait};
use super::{impl_trait_from_reflect, impl_trait_reflect};

use crate::derive_data::ReflectStruct;

/// Implement `Reflect`, `Struct` and `FromReflect` for a struct with named fields.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let field_types = info.field_types();

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let partial_eq_tokens = if meta.attrs().partial_eq.is_some() {
        partial_eq_by_trait(meta)
    } else {
        get_struct_partial_eq_impl(info)
    };
    let debug_tokens = if meta.attrs().debug.is_some() {
        debug_by_trait()
    } else {
        TokenStream::new()
    };
    let reflect_trait_tokens = impl_trait_reflect(
        meta,
        &field_types,
        Ident::new("Struct", Span::call_site()),
        partial_eq_tokens,
        debug_tokens,
    );

    // trait: FromReflect
    let from_reflect_tokens = impl_trait_from_reflect(meta, &field_types);

    quote! {
        #reflect_trait_tokens

        #struct_trait_tokens

        #from_reflect_tokens
    }
}

/// Field-wise comparison.
fn get_struct_partial_eq_impl(info: &ReflectStruct) -> TokenStream {
    let jq_reflect_path = info.meta().jq_reflect_path();
    let reflect_ = crate::path::reflect_(jq_reflect_path);
    let impls_ = crate::path::impls_(jq_reflect_path);

    quote! {
        #[inline]
        fn reflect_partial_eq(&self, other: &dyn #reflect_) -> ::core::option::Option<bool> {
            #impls_::struct_partial_eq(self, other)
        }
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let jq_reflect_path = meta.jq_reflect_path();
    let struct_ = crate::path::struct_(jq_reflect_path);
    let reflect_ = crate::path::reflect_(jq_reflect_path);
    let named_field_ = crate::path::named_field_(jq_reflect_path);

    let field_count = info.fields().len();

    let field_infos = info.fields().iter().map(|field| {
        let name = field.ident.to_string();
        match field.attrs.alias() {
            Some(alias) => quote!(#named_field_::new(#name).with_alias(#alias)),
            None => quote!(#named_field_::new(#name)),
        }
    });

    let field_idents = info
        .fields()
        .iter()
        .map(|field| field.ident)
        .collect::<Vec<_>>();
    let field_indices = (0..field_count).map(Index::from).collect::<Vec<_>>();

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(&info.field_types());

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field_infos(&self) -> &'static [#named_field_] {
                static FIELDS: [#named_field_; #field_count] = [#(#field_infos),*];
                &FIELDS
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #reflect_> {
                match index {
                    #(#field_indices => ::core::option::Option::Some(&mut self.#field_idents as &mut dyn #reflect_),)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_count
            }
        }
    }
}
