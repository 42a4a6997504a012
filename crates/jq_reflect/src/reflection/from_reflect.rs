use alloc::boxed::Box;

use crate::Reflect;

/// A trait that enables types to be constructed from reflected data.
///
/// It's recommended to use the [derive macro] rather than manually
/// implementing this trait.
///
/// Collections need this trait from their element types: a `Vec<T>`
/// converts pushed values with [`take_from_reflect`], a map checks written
/// values with [`accepts`], and a path write that grows a list appends
/// [`default_value`].
///
/// # Rules
///
/// 1. [`accepts`] is `true` only for values of type `Self`, except for
///    [`Dynamic`], which accepts anything.
/// 2. [`from_reflect`] clones accepted values through
///    [`Reflect::reflect_clone`].
/// 3. [`default_value`] is `None` unless the type has an obvious empty
///    value (numbers, `String`, `Option`, collections) or is derived with
///    `#[reflect(default)]`.
///
/// # Examples
///
/// ```
/// use jq_reflect::{FromReflect, derive::Reflect};
///
/// #[derive(Reflect, Clone, Default, PartialEq, Debug)]
/// #[reflect(default)]
/// struct A {
///     field_a: i32,
///     field_b: bool,
/// }
///
/// let source = A { field_a: 10, field_b: true };
/// let a = A::from_reflect(&source).unwrap();
///
/// assert_eq!(a, source);
/// assert_eq!(A::default_value(), Some(A::default()));
/// assert!(A::from_reflect(&10_i32).is_none());
/// ```
///
/// [`take_from_reflect`]: FromReflect::take_from_reflect
/// [`from_reflect`]: FromReflect::from_reflect
/// [`accepts`]: FromReflect::accepts
/// [`default_value`]: FromReflect::default_value
/// [`Dynamic`]: crate::ops::Dynamic
/// [derive macro]: crate::derive::Reflect
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromReflect` so cannot be created through reflection",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromReflect: Reflect + Sized {
    /// Converts a boxed value into `Self`, handing it back on failure.
    #[inline]
    fn take_from_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        reflect.take::<Self>()
    }

    /// Constructs a concrete instance of `Self` from a reflected value.
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        if Self::accepts(reflect) {
            Self::take_from_reflect(reflect.reflect_clone()).ok()
        } else {
            None
        }
    }

    /// Returns `true` if [`take_from_reflect`](FromReflect::take_from_reflect)
    /// would succeed for this value.
    #[inline]
    fn accepts(reflect: &dyn Reflect) -> bool {
        reflect.is::<Self>()
    }

    /// Returns the value a growing collection appends, if any.
    #[inline]
    fn default_value() -> Option<Self> {
        None
    }
}
