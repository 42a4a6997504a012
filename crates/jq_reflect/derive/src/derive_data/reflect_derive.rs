use syn::{Data, DeriveInput, Fields, Ident, Type, spanned::Spanned};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A parsed `#[derive(Reflect)]` input.
pub(crate) enum ReflectDerive<'a> {
    /// `struct T { ... }`
    Struct(ReflectStruct<'a>),
    /// `struct T;`
    UnitStruct(ReflectMeta<'a>),
    /// `#[reflect(opaque)]`
    Opaque(ReflectMeta<'a>),
}

/// A named field of a [`ReflectStruct`].
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// The types of every field, in declaration order.
    pub fn field_types(&self) -> Vec<&'a Type> {
        self.fields.iter().map(|field| field.ty).collect()
    }
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if let Some(lifetime) = input.generics.lifetimes().next() {
            return Err(syn::Error::new(
                lifetime.span(),
                "`Reflect` cannot be derived for types with lifetime parameters",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        if opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let fields = named
                        .named
                        .iter()
                        .map(|field| {
                            Ok(StructField {
                                ident: field.ident.as_ref().ok_or_else(|| {
                                    syn::Error::new(field.span(), "expected a named field")
                                })?,
                                ty: &field.ty,
                                attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                            })
                        })
                        .collect::<syn::Result<Vec<_>>>()?;
                    Ok(Self::Struct(ReflectStruct { meta, fields }))
                }
                Fields::Unit => Ok(Self::UnitStruct(meta)),
                Fields::Unnamed(_) => Err(syn::Error::new(
                    input.ident.span(),
                    "tuple structs must be marked `#[reflect(opaque)]`",
                )),
            },
            Data::Enum(_) => Err(syn::Error::new(
                input.ident.span(),
                "enums must be marked `#[reflect(opaque)]`",
            )),
            Data::Union(_) => Err(syn::Error::new(
                input.ident.span(),
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}
