//! Re-exports [`fastvec`]'s containers.
//!
//! It's a high-performance vector crate tuned for small data sizes,
//! access paths rarely have more than a handful of segments.

// -----------------------------------------------------------------------------
// Stack Only

pub use fastvec::{StackVec, stack_vec};

// -----------------------------------------------------------------------------
// Data Process

pub use fastvec::{FastVec, fast_vec};
