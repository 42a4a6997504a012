use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// Information shared by every implementation generated for one type.
pub(crate) struct ReflectMeta<'a> {
    jq_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("jq_reflect_path", &self.jq_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            jq_reflect_path: crate::path::jq_reflect(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn jq_reflect_path(&self) -> &Path {
        &self.jq_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// The three parameters returned are `impl_generics`, `ty_generics`, `where_clause`.
    ///
    /// ## Example
    ///
    /// ```ignore
    /// let ident = meta.ident();
    /// let (impl_generics, ty_generics, where_clause) = meta.split_generics(&field_types);
    ///
    /// quote! {
    ///     impl #impl_generics TraitName for #ident #ty_generics #where_clause {
    ///         /* ... */
    ///     }
    /// }
    /// ```
    ///
    /// Generic types get additional bounds:
    ///
    /// - `Self: Any + Send + Sync + Clone`, required by `Reflect`;
    /// - `Self: Default` with the `default` flag;
    /// - `Field: Reflect` for every field type.
    ///
    /// Non-generic types keep their own where clause, if any.
    pub fn split_generics(
        &self,
        field_types: &[&Type],
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();
        let predicates = where_clause.map(|clause| clause.predicates.iter());
        let predicates = predicates.into_iter().flatten();

        if self.generics.type_params().next().is_none() {
            let tokens = quote! { where #(#predicates,)* };
            return (impl_generics, ty_generics, tokens);
        }

        let reflect_ = crate::path::reflect_(&self.jq_reflect_path);
        let default_bound = self
            .attrs
            .default
            .map(|_| quote!(+ ::core::default::Default));

        let tokens = quote! {
            where
                Self: ::core::any::Any + ::core::marker::Send + ::core::marker::Sync
                    + ::core::clone::Clone #default_bound,
                #(#field_types: #reflect_,)*
                #(#predicates,)*
        };
        (impl_generics, ty_generics, tokens)
    }
}
