//! Static information about reflected types.
//!
//! ## Menu
//!
//! - [`ReflectKind`]: the structural kind of a value, for example `Struct`, `List`, `Opaque`.
//! - [`NamedField`]: a struct field's declared name and optional alias.
//! - [`FieldCase`]: how a path segment is compared against field names and map keys.
//! - [`short_type_name`]: a type path without module prefixes, used in error messages.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod type_name;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::{FieldCase, NamedField};
pub use kind::ReflectKind;
pub use type_name::short_type_name;
