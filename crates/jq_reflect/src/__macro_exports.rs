//! Items named by `#[derive(Reflect)]` and `impl_reflect_opaque!` output.
//!
//! Generated code may live in `no_std` crates without `extern crate alloc`.

pub use alloc::boxed::Box;
