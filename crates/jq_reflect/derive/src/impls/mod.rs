// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod opaque_kind;
mod struct_kind;

mod from_reflect;
mod trait_reflect;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use from_reflect::impl_trait_from_reflect;
use opaque_kind::{impl_opaque, impl_unit};
use struct_kind::impl_struct;
use trait_reflect::impl_trait_reflect;
