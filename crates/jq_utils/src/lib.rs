//! Small shared utilities for the `jq` crates.
//!
//! - [`vec`]: stack-first vectors used while parsing access paths.
//! - [`hash`]: a `hashbrown` map with a fixed, seeded `foldhash` state.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod hash;
pub mod vec;
