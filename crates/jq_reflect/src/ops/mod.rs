//! Provide interfaces for data operation.
//!
//! ## Menu
//!
//! ### Interface
//!
//! The following are subtraits of [`Reflect`], each providing data access
//! methods for one structural kind:
//!
//! - [`Struct`]: For struct (e.g. `A{ .. }`), fields addressed by name.
//! - [`List`]: For growable sequences (e.g. `Vec<i32>`).
//! - [`Array`]: For fixed-length sequences (e.g. `[i32; 5]`).
//! - [`Map`]: For string-keyed maps (e.g. `BTreeMap<String, f32>`).
//! - [`Pointer`]: For indirections holding zero or one value (e.g. `Option<T>`, `Box<T>`).
//! - [`Number`]: For numeric scalars, convertible through [`NumberValue`].
//!
//! ### Dynamic Type
//!
//! - [`Dynamic`]: a slot that can hold a value of any reflected type,
//!   similar to `Option<Box<dyn Reflect>>`.
//!
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod array_ops;
mod dynamic;
mod kind;
mod list_ops;
mod map_ops;
mod number_ops;
mod pointer_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use dynamic::{unwrap_dynamic, unwrap_dynamic_mut};

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};

pub use array_ops::{Array, ArrayItemIter};
pub use dynamic::Dynamic;
pub use list_ops::{List, ListItemIter};
pub use map_ops::Map;
pub use number_ops::{Number, NumberValue};
pub use pointer_ops::Pointer;
pub use struct_ops::{Struct, StructFieldIter};
