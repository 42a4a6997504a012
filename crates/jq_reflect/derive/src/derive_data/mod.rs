//! Provide some tools for parsing the derive input.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod reflect_derive;
mod reflect_meta;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use reflect_derive::{ReflectDerive, ReflectStruct};
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use type_attributes::TypeAttributes;
