//! Runtime reflection for path-addressed reads and writes.
//!
//! `jq_reflect` describes arbitrary values through the [`Reflect`] trait and a
//! small set of kind-specific subtraits (see [`ops`]), then uses that
//! description to resolve dotted paths such as `"address.city"` or
//! `"hobbies.0"` (see [`access`]).
//!
//! ```
//! use jq_reflect::{derive::Reflect, access::ReflectPathAccess};
//!
//! #[derive(Reflect, Clone, Default)]
//! struct Address { city: String }
//!
//! #[derive(Reflect, Clone, Default)]
//! struct Person {
//!     name: String,
//!     hobbies: Vec<String>,
//!     address: Address,
//! }
//!
//! let mut person = Person {
//!     name: "John Doe".into(),
//!     hobbies: vec!["reading".into(), "hiking".into()],
//!     address: Address { city: "Anytown".into() },
//! };
//!
//! assert_eq!(person.read_path_as::<String>("hobbies.0").unwrap(), "reading");
//!
//! let changed = person.write_path("address.city", &String::from("Springfield")).unwrap();
//! assert!(changed);
//! assert_eq!(person.address.city, "Springfield");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names `::jq_reflect`, this keeps derives usable in our own tests.
extern crate self as jq_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use reflection::{FromReflect, Reflect};
pub use jq_reflect_derive as derive;
