//! Provide hash containers, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Iteration order only depends on the inserted keys, not on a random seed,
/// so two maps built the same way iterate the same way.
///
/// # Examples
///
/// ```
/// use jq_utils::hash::HashMap;
///
/// let mut map = HashMap::default();
/// map.insert("city", "Anytown");
/// assert_eq!(map.get("city"), Some(&"Anytown"));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
