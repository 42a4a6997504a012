use alloc::boxed::Box;
use core::fmt;

use crate::info::ReflectKind;
use crate::ops::{Pointer, ReflectMut, ReflectRef};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Dynamic

/// A slot that can hold one value of any reflected type, or nothing.
///
/// `Dynamic` is a [`Pointer`] whose [`is_dynamic`] returns `true`:
/// a path write into a `Dynamic` replaces its content with a clone of the
/// written value whatever its type, and a path read through it sees the
/// content directly.
///
/// Nested `Dynamic`s are flattened on construction, a `Dynamic` never holds
/// another `Dynamic`.
///
/// # Examples
///
/// ```
/// use jq_reflect::ops::Dynamic;
///
/// let mut slot = Dynamic::new(3_u8);
/// assert_eq!(slot.downcast_ref::<u8>(), Some(&3));
///
/// slot = Dynamic::new(Dynamic::new(String::from("text")));
/// assert_eq!(slot.downcast_ref::<String>().unwrap(), "text");
///
/// assert!(Dynamic::empty().is_empty());
/// ```
///
/// [`is_dynamic`]: Pointer::is_dynamic
#[derive(Default)]
pub struct Dynamic(Option<Box<dyn Reflect>>);

impl Dynamic {
    /// Creates an empty slot.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Creates a slot holding `value`.
    #[inline]
    pub fn new<T: Reflect>(value: T) -> Self {
        Self::from_boxed(Box::new(value))
    }

    /// Creates a slot holding a boxed value, flattening nested slots.
    pub fn from_boxed(value: Box<dyn Reflect>) -> Self {
        match value.take::<Dynamic>() {
            Ok(inner) => inner,
            Err(value) => Self(Some(value)),
        }
    }

    /// Returns `true` if the slot holds nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the content, if any.
    #[inline]
    pub fn get(&self) -> Option<&dyn Reflect> {
        self.0.as_deref()
    }

    /// Returns the content mutably, if any.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.0.as_deref_mut()
    }

    /// Downcasts the content to `T`.
    #[inline]
    pub fn downcast_ref<T: Reflect>(&self) -> Option<&T> {
        self.get()?.downcast_ref()
    }

    /// Downcasts the content to `T` mutably.
    #[inline]
    pub fn downcast_mut<T: Reflect>(&mut self) -> Option<&mut T> {
        self.get_mut()?.downcast_mut()
    }

    /// Takes the content out, leaving the slot empty.
    #[inline]
    pub fn take(&mut self) -> Option<Box<dyn Reflect>> {
        self.0.take()
    }

    /// Consumes the slot, returning its content.
    #[inline]
    pub fn into_inner(self) -> Option<Box<dyn Reflect>> {
        self.0
    }
}

/// Returns the content of a non-empty [`Dynamic`], or `value` itself.
pub(crate) fn unwrap_dynamic(value: &dyn Reflect) -> &dyn Reflect {
    match value.downcast_ref::<Dynamic>().and_then(Dynamic::get) {
        Some(inner) => inner,
        None => value,
    }
}

/// Mutable counterpart of [`unwrap_dynamic`].
pub(crate) fn unwrap_dynamic_mut(value: &mut dyn Reflect) -> &mut dyn Reflect {
    match value.reflect_mut() {
        ReflectMut::Pointer(slot) if slot.is_dynamic() => slot.pointee_or_self_mut(),
        kind => kind.into_reflect(),
    }
}

impl Clone for Dynamic {
    fn clone(&self) -> Self {
        Self(self.0.as_ref().map(|value| value.reflect_clone()))
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => value.reflect_debug(f),
            None => f.write_str("Dynamic(<empty>)"),
        }
    }
}

impl PartialEq for Dynamic {
    fn eq(&self, other: &Self) -> bool {
        Reflect::reflect_partial_eq(self, other) == Some(true)
    }
}

impl Reflect for Dynamic {
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = Self::from_boxed(value);
        Ok(())
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Pointer
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Pointer(self)
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Pointer(self)
    }

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let other = match other.downcast_ref::<Dynamic>() {
            Some(slot) => slot.get(),
            None => Some(other),
        };
        match (self.get(), other) {
            (Some(this), Some(other)) => this.reflect_partial_eq(other),
            (None, None) => Some(true),
            _ => Some(false),
        }
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl Pointer for Dynamic {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.get()
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.get_mut()
    }

    fn pointee_or_self_mut(&mut self) -> &mut dyn Reflect {
        match self.0 {
            Some(ref mut value) => &mut **value,
            None => self,
        }
    }

    #[inline]
    fn is_dynamic(&self) -> bool {
        true
    }
}

impl FromReflect for Dynamic {
    #[inline]
    fn take_from_reflect(value: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        Ok(Self::from_boxed(value))
    }

    #[inline]
    fn accepts(_value: &dyn Reflect) -> bool {
        true
    }

    #[inline]
    fn default_value() -> Option<Self> {
        Some(Self::empty())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use super::{Dynamic, unwrap_dynamic, unwrap_dynamic_mut};
    use crate::{FromReflect, Reflect};

    #[test]
    fn set_accepts_any_type() {
        let mut slot = Dynamic::new(1_u8);
        slot.set(String::from("x").into_boxed_reflect()).unwrap();
        assert_eq!(slot.downcast_ref::<String>().unwrap(), "x");

        slot.set(Dynamic::empty().into_boxed_reflect()).unwrap();
        assert!(slot.is_empty());
    }

    #[test]
    fn compares_content() {
        let a = Dynamic::new(vec![1_i64, 2]);
        assert_eq!(a.reflect_partial_eq(&vec![1_i64, 2]), Some(true));
        assert_eq!(a.reflect_partial_eq(&vec![1_i32, 2]), Some(false));
        assert_eq!(a, a.clone());
        assert_ne!(a, Dynamic::empty());
        assert_eq!(Dynamic::empty(), Dynamic::default());
    }

    #[test]
    fn unwraps_only_non_empty() {
        let full = Dynamic::new(5_u32);
        assert!(unwrap_dynamic(&full).is::<u32>());

        let empty = Dynamic::empty();
        assert!(unwrap_dynamic(&empty).is::<Dynamic>());

        let mut full = full;
        *unwrap_dynamic_mut(&mut full).downcast_mut::<u32>().unwrap() = 6;
        assert_eq!(full.downcast_ref::<u32>(), Some(&6));

        let mut empty = empty;
        assert!(unwrap_dynamic_mut(&mut empty).is::<Dynamic>());

        let mut other = Some(5_u32);
        assert!(unwrap_dynamic_mut(&mut other).is::<Option<u32>>());
    }

    #[test]
    fn from_reflect_wraps_anything() {
        let slot = Dynamic::from_reflect(&true).unwrap();
        assert_eq!(slot.downcast_ref::<bool>(), Some(&true));
        assert!(Dynamic::accepts(&1.5_f64));
        assert_eq!(alloc::format!("{:?}", Dynamic::empty()), "Dynamic(<empty>)");
    }
}
