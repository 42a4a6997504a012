use alloc::boxed::Box;

use crate::Reflect;
use crate::info::FieldCase;

// -----------------------------------------------------------------------------
// Map

/// A trait used to power [map-like] operations via [reflection].
///
/// Maps are keyed by [`String`], so every entry is addressable by a path
/// segment. Implemented for `BTreeMap<String, V>`, `HashMap<String, V, S>`
/// and [`jq_utils::hash::HashMap<String, V, S>`](jq_utils::hash::HashMap).
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use jq_reflect::ops::Map;
///
/// let mut foo = BTreeMap::<String, i64>::new();
/// foo.insert("a".into(), 1);
///
/// let map: &mut dyn Map = &mut foo;
/// assert_eq!(map.len(), 1);
/// assert!(map.accepts(&5_i64));
/// assert!(!map.accepts(&5_i32));
///
/// map.insert_boxed("b", Box::new(2_i64)).unwrap();
/// assert_eq!(foo["b"], 2);
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
/// [reflection]: crate
/// [`String`]: alloc::string::String
pub trait Map: Reflect {
    /// Returns a reference to the value associated with the given key.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value associated with the given key.
    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect>;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs of the map,
    /// in the map's own iteration order.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;

    /// Returns `true` if `value` can be stored as a value of this map.
    ///
    /// See [`FromReflect::accepts`](crate::FromReflect::accepts).
    fn accepts(&self, value: &dyn Reflect) -> bool;

    /// Returns the type path of the map's value type.
    fn value_type_path(&self) -> &'static str;

    /// Inserts a key-value pair into the map.
    ///
    /// Returns the previous value of `key`, if any.
    /// The value is handed back if it cannot be converted to the value type.
    fn insert_boxed(
        &mut self,
        key: &str,
        value: Box<dyn Reflect>,
    ) -> Result<Option<Box<dyn Reflect>>, Box<dyn Reflect>>;
}

impl dyn Map {
    /// Returns the first key addressed by a path `segment`.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use jq_reflect::{info::FieldCase, ops::Map};
    ///
    /// let mut foo = BTreeMap::<String, u8>::new();
    /// foo.insert("Key".into(), 1);
    /// let map: &dyn Map = &foo;
    ///
    /// assert_eq!(map.find_key("Key", FieldCase::Sensitive), Some("Key"));
    /// assert_eq!(map.find_key("key", FieldCase::Sensitive), None);
    /// assert_eq!(map.find_key("key", FieldCase::Insensitive), Some("Key"));
    /// ```
    pub fn find_key(&self, segment: &str, case: FieldCase) -> Option<&str> {
        self.iter()
            .map(|(key, _)| key)
            .find(|key| case.matches(key, segment))
    }
}
