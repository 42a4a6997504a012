use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::ReflectKind;
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for runtime reflection in [`jq_reflect`].
///
/// A `dyn Reflect` can be inspected without compile-time knowledge of its
/// concrete type: [`reflect_ref`] and [`reflect_mut`] expose the value as one
/// of the kind subtraits ([`Struct`], [`List`], [`Array`], [`Map`],
/// [`Pointer`], [`Number`]) or as an opaque scalar.
///
/// # Type Identification
///
/// [`Any::type_id`] on a `Box<dyn Reflect>` returns the id of the box,
/// not of the value inside. Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use jq_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());    // Container type ID
/// assert!(x.ty_id() == TypeId::of::<i32>());      // Preferred method
/// ```
///
/// # Implementation Guide
///
/// Prefer [the derive macro](crate::derive::Reflect). A manual
/// implementation has a fixed shape for the kind casts:
///
/// ```rust, ignore
/// fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
///     *self = value.take::<Self>()?;
///     Ok(())
/// }
///
/// fn reflect_kind(&self) -> ReflectKind {
///     ReflectKind::Struct
/// }
///
/// fn reflect_ref(&self) -> ReflectRef<'_> {
///     ReflectRef::Struct(self)
/// }
///
/// fn reflect_mut(&mut self) -> ReflectMut<'_> {
///     ReflectMut::Struct(self)
/// }
/// ```
///
/// and the helpers in [`jq_reflect::impls`](crate::impls) cover
/// [`reflect_partial_eq`] and [`reflect_debug`] for each kind.
///
/// [`jq_reflect`]: crate
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`reflect_mut`]: Reflect::reflect_mut
/// [`reflect_partial_eq`]: Reflect::reflect_partial_eq
/// [`reflect_debug`]: Reflect::reflect_debug
/// [`Struct`]: crate::ops::Struct
/// [`List`]: crate::ops::List
/// [`Array`]: crate::ops::Array
/// [`Map`]: crate::ops::Map
/// [`Pointer`]: crate::ops::Pointer
/// [`Number`]: crate::ops::Number
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Reflect`",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait Reflect: Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use jq_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a mutable, fully-reflected value.
    #[inline(always)]
    fn as_reflect_mut(&mut self) -> &mut dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this type to a boxed, fully-reflected value.
    ///
    /// # Example
    ///
    /// ```
    /// use jq_reflect::Reflect;
    ///
    /// let r = 32.into_boxed_reflect();
    /// assert!(r.is::<i32>());
    /// ```
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Return the [`TypeId`] of underlying type.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the full path of the underlying type, such as
    /// `alloc::vec::Vec<i32>`.
    ///
    /// See [`short_type_name`](crate::info::short_type_name) for the form
    /// used in error messages.
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Performs a type-checked assignment of a reflected value to this value.
    ///
    /// Returns the value back if its type does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jq_reflect::Reflect;
    /// let data = vec![1_i32, 2_i32, 3_i32].into_boxed_reflect();
    /// let mut vec = Vec::<i32>::new();
    ///
    /// vec.set(data).unwrap();
    /// assert_eq!(vec, [1, 2, 3]);
    ///
    /// assert!(vec.set(Box::new(1_u8)).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Returns a pure enumeration of ["kinds"](ReflectKind) of type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jq_reflect::{Reflect, info::ReflectKind};
    /// let vec = vec![1, 2, 3].into_boxed_reflect();
    ///
    /// assert_eq!(vec.reflect_kind(), ReflectKind::List);
    /// ```
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns an immutable enumeration of ["kinds"](ReflectRef) of type.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Returns a mutable enumeration of ["kinds"](ReflectMut) of type.
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// Clones `Self` into a new boxed value of the same concrete type.
    ///
    /// # Example
    ///
    /// ```
    /// # use jq_reflect::Reflect;
    /// let value = String::from("text");
    /// let cloned = value.reflect_clone();
    /// assert!(cloned.is::<String>())
    /// ```
    fn reflect_clone(&self) -> Box<dyn Reflect>;

    /// Returns a "partial equality" comparison result.
    ///
    /// Values of different concrete types are never equal, so
    /// `1_i32` and `1_i64` compare as `Some(false)`.
    ///
    /// If the underlying type does not support equality testing, returns `None`.
    /// A `None` is treated as "not equal" by writers, so the value is
    /// always overwritten.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// For opaque type, this function will write `"Opaque(type_path)"` by default.
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) => impls::list_debug(data, f),
            ReflectRef::Array(data) => impls::array_debug(data, f),
            ReflectRef::Map(data) => impls::map_debug(data, f),
            ReflectRef::Pointer(data) => impls::pointer_debug(data, f),
            ReflectRef::Number(data) => fmt::Display::fmt(&data.number(), f),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jq_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// assert!(x.is::<i32>());
    /// ```
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jq_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let y = x.downcast_ref::<i32>().unwrap();
    /// assert_eq!(*y, 10);
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// If the underlying value is not of type `T`, returns `None`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jq_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x: Box<i32> = x.downcast::<i32>().unwrap();
    /// assert_eq!(*x, 10);
    /// ```
    #[inline]
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            Ok(any.downcast::<T>().unwrap_or_else(|_| unreachable!()))
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jq_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10.into_boxed_reflect();
    ///
    /// let x = x.take::<i32>().unwrap();
    /// assert_eq!(x, 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implement some common methos like `reflect_kind` and `reflect_ref`.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        fn set(
            &mut self,
            value: ::alloc::boxed::Box<dyn $crate::Reflect>,
        ) -> Result<(), ::alloc::boxed::Box<dyn $crate::Reflect>> {
            *self = value.take::<Self>()?;
            Ok(())
        }

        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Tests
