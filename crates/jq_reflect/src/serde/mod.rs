//! Bridges reflected values and `serde`.
//!
//! - [`Dynamic`] implements `Deserialize` for every self-describing format,
//!   building a tree of dynamic values: objects become
//!   `BTreeMap<String, Dynamic>`, arrays `Vec<Dynamic>`, integers `i64` or
//!   `u64`, floats `f64`, and `null` an empty [`Dynamic`]. Such trees can
//!   be written into typed values with [`access::write`], which merges maps
//!   into structs and converts numbers.
//! - [`ReflectSerializer`] serializes any reflected value through its
//!   structure, without requiring `Serialize` implementations.
//!
//! # Examples
//!
//! ```
//! use jq_reflect::{access, derive::Reflect, ops::Dynamic, serde::ReflectSerializer};
//!
//! #[derive(Reflect, Clone, Default)]
//! struct Point { x: i32, y: i32 }
//!
//! let patch: Dynamic = serde_json::from_str(r#"{ "x": 1, "y": -2 }"#).unwrap();
//!
//! let mut point = Point::default();
//! access::write(&mut point, "", &patch).unwrap();
//!
//! let text = serde_json::to_string(&ReflectSerializer::new(&point)).unwrap();
//! assert_eq!(text, r#"{"x":1,"y":-2}"#);
//! ```
//!
//! [`Dynamic`]: crate::ops::Dynamic
//! [`access::write`]: crate::access::write

// -----------------------------------------------------------------------------
// Modules

mod de;
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use ser::ReflectSerializer;
