//! Provide reflection implementations for foreign types, and utilities for
//! implementing reflection traits.
//!
//! - `xxx_partial_eq`: Used to implement [`Reflect::reflect_partial_eq`] (e.g. [`list_partial_eq`]).
//! - `xxx_debug`: Used to implement [`Reflect::reflect_debug`] (e.g. [`list_debug`]).
//! - [`impl_reflect_opaque!`]: Implements [`Reflect`] and [`FromReflect`] for
//!   a foreign `Clone + PartialEq + Debug` scalar type.
//!
//! ## Implemented Menu
//!
//! - numbers: `i8`-`i64`, `u8`-`u64`, `isize`, `usize`, `f32`, `f64`
//! - opaque: `bool`, `char`, `String`, `()`
//! - lists: `Vec<T>`, `VecDeque<T>`
//! - arrays: `[T; N]`
//! - pointers: `Option<T>`, `Box<T>`
//! - maps (string keys only): `BTreeMap<String, V>`,
//!   `jq_utils::hash::HashMap<String, V, S>`, and `std::collections::HashMap<String, V, S>`
//!   with the `std` feature.
//!
//! [`Reflect`]: crate::Reflect
//! [`FromReflect`]: crate::FromReflect
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug
//! [`impl_reflect_opaque!`]: crate::impl_reflect_opaque

// -----------------------------------------------------------------------------
// Modules

mod array;
mod list;
mod map;
mod num;
mod opaque;
mod pointer;
mod utils;

// -----------------------------------------------------------------------------
// Exports

pub use utils::*;
