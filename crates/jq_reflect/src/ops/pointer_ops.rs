use crate::Reflect;

// -----------------------------------------------------------------------------
// Pointer

/// A trait used to power indirections via [reflection].
///
/// A pointer holds zero or one underlying value: `Option<T>`, `Box<T>`
/// and [`Dynamic`](crate::ops::Dynamic) are pointers. Path access looks
/// through pointers transparently.
///
/// # Example
///
/// ```
/// use jq_reflect::{Reflect, ops::Pointer};
///
/// let some: &dyn Pointer = &Some(3_u8);
/// let none: &dyn Pointer = &None::<u8>;
///
/// assert_eq!(some.pointee().unwrap().downcast_ref::<u8>(), Some(&3));
/// assert!(none.pointee().is_none());
/// ```
///
/// [reflection]: crate
pub trait Pointer: Reflect {
    /// Returns the underlying value, `None` if the pointer is empty.
    fn pointee(&self) -> Option<&dyn Reflect>;

    /// Returns the underlying value mutably, `None` if the pointer is empty.
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;

    /// Returns the underlying value mutably, or the pointer itself if empty.
    fn pointee_or_self_mut(&mut self) -> &mut dyn Reflect;

    /// Returns `true` if this pointer accepts values of any type.
    ///
    /// Only [`Dynamic`](crate::ops::Dynamic) returns `true`.
    #[inline]
    fn is_dynamic(&self) -> bool {
        false
    }
}
