//! Read and write nested values by a dotted path.
//!
//! A path is a string of segments separated by `.`, such as
//! `"address.city"` or `"hobbies.0"`. The empty path is the root itself.
//! Each segment is resolved against the current value:
//!
//! - struct: a field whose alias, or declared name, equals the segment;
//! - list and array: a base-10 index;
//! - map: an entry whose key equals the segment;
//! - `Option`, `Box` and [`Dynamic`]: looked through, the same segment is
//!   applied to their content.
//!
//! The operations are exposed in three ways:
//!
//! - free functions ([`read`], [`read_as`], [`read_mut`], [`read_mut_as`],
//!   [`write`]) using [`AccessOptions::DEFAULT`], and methods of the same
//!   names on [`AccessOptions`] for configured calls;
//! - [`ReflectPathAccess`], implemented for every reflected value, parsing the
//!   path on each call;
//! - [`PathAccessor`], parsed once and reusable, carrying its own options.
//!
//! # Writing
//!
//! [`write`] stores a clone of the new value and reports whether the stored
//! value changed. Values of another type are converted when possible:
//! numbers are cast to the destination's number type, and a map written to
//! a struct is merged into it field by field, ignoring unknown keys.
//! Writing the index equal to a list's length appends one element.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use jq_reflect::derive::Reflect;
//! use jq_reflect::ops::Dynamic;
//! use jq_reflect::access::{self, ReflectPathAccess};
//!
//! #[derive(Reflect, Clone, Default)]
//! #[reflect(default)]
//! struct Address { city: String, zip: u32 }
//!
//! #[derive(Reflect, Clone)]
//! struct Person { name: String, address: Address, tags: Vec<String> }
//!
//! let mut person = Person {
//!     name: "Ann".into(),
//!     address: Address::default(),
//!     tags: vec![],
//! };
//!
//! // append, then read back
//! person.write_path("tags.0", &String::from("admin")).unwrap();
//! assert_eq!(person.read_path_as::<String>("tags.0").unwrap(), "admin");
//!
//! // merge a map into a struct
//! let mut patch = BTreeMap::new();
//! patch.insert(String::from("city"), Dynamic::new(String::from("Oslo")));
//! patch.insert(String::from("zip"), Dynamic::new(150_i64));
//! patch.insert(String::from("unknown"), Dynamic::new(true));
//!
//! assert!(access::write(&mut person, "address", &patch).unwrap());
//! assert_eq!(person.address.city, "Oslo");
//! assert_eq!(person.address.zip, 150);
//! ```
//!
//! [`Dynamic`]: crate::ops::Dynamic

// -----------------------------------------------------------------------------
// Modules

mod assign;
mod error;
mod options;
mod path;
mod path_access;
mod traverse;

// -----------------------------------------------------------------------------
// Exports

pub use error::AccessError;
pub use options::{AccessOptions, Growth};
pub use path::{Segments, segments};
pub use path_access::{PathAccessor, ReflectPathAccess};
pub use path_access::{read, read_as, read_mut, read_mut_as, write};

pub use crate::info::FieldCase;
