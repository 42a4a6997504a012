//! Provides `#[derive(Reflect)]` for `jq_reflect`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static SERDE_ATTRIBUTE_NAME: &str = "serde";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `Reflect`
/// - `FromReflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Unit structs (`struct T;`) and types marked `#[reflect(opaque)]` are
/// treated as `Opaque` scalars. Tuple structs and enums must be marked
/// `#[reflect(opaque)]`.
///
/// Every derived type must implement `Clone`.
///
/// ## Type Attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Clone, Default, PartialEq, Debug)]
/// #[reflect(default, partial_eq, debug)]
/// struct Foo { /* ... */ }
/// ```
///
/// - `default`: the type implements `Default`; lists of it can grow by path
///   writes.
/// - `partial_eq`: use the type's `PartialEq` instead of comparing fields.
/// - `debug`: use the type's `Debug` instead of printing fields.
/// - `opaque`: do not inspect fields, the value is an opaque scalar. Without
///   `partial_eq`, two opaque values never compare equal.
///
/// ## Field Attributes
///
/// `#[reflect(alias = "name")]` makes a field addressable by `name` instead of
/// its declared name, an empty alias is ignored and `#[reflect(alias = "-")]`
/// hides the field from paths.
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Person {
///     #[reflect(alias = "fullName")]
///     full_name: String,
///     #[reflect(alias = "-")]
///     password: String,
/// }
/// ```
///
/// Without a `reflect` alias, `#[serde(rename = "name")]` is used as the alias
/// and `#[serde(skip)]` hides the field. Other `serde` options are ignored.
///
/// ## Generics
///
/// Generic types are supported, every field type must then implement
/// `Reflect`. Lifetime parameters are rejected.
#[proc_macro_derive(Reflect, attributes(reflect, serde))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
