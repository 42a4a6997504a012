use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{Array, List, Map, Number, Pointer, Struct};

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of ["kinds"] of a reflected type.
///
/// Each variant contains a trait object with methods specific to a kind of
/// type.
///
/// A [`ReflectRef`] is obtained via [`Reflect::reflect_ref`].
///
/// ["kinds"]: ReflectKind
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn Array),
    Map(&'a dyn Map),
    Pointer(&'a dyn Pointer),
    Number(&'a dyn Number),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the "kind" of this reflected type without any information.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Number(_) => ReflectKind::Number,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the [`Struct`] view, if this is a struct.
    #[inline]
    pub fn as_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`List`] view, if this is a list.
    #[inline]
    pub fn as_list(self) -> Option<&'a dyn List> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Map`] view, if this is a map.
    #[inline]
    pub fn as_map(self) -> Option<&'a dyn Map> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Pointer`] view, if this is an indirection.
    #[inline]
    pub fn as_pointer(self) -> Option<&'a dyn Pointer> {
        match self {
            Self::Pointer(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Number`] view, if this is a number.
    #[inline]
    pub fn as_number(self) -> Option<&'a dyn Number> {
        match self {
            Self::Number(value) => Some(value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectMut

/// A mutable enumeration of ["kinds"] of a reflected type.
///
/// A [`ReflectMut`] is obtained via [`Reflect::reflect_mut`].
///
/// ["kinds"]: ReflectKind
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    List(&'a mut dyn List),
    Array(&'a mut dyn Array),
    Map(&'a mut dyn Map),
    Pointer(&'a mut dyn Pointer),
    Number(&'a mut dyn Number),
    Opaque(&'a mut dyn Reflect),
}

impl<'a> ReflectMut<'a> {
    /// Returns the "kind" of this reflected type without any information.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Map(_) => ReflectKind::Map,
            Self::Pointer(_) => ReflectKind::Pointer,
            Self::Number(_) => ReflectKind::Number,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the [`Struct`] view, if this is a struct.
    #[inline]
    pub fn as_struct(self) -> Option<&'a mut dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`List`] view, if this is a list.
    #[inline]
    pub fn as_list(self) -> Option<&'a mut dyn List> {
        match self {
            Self::List(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Map`] view, if this is a map.
    #[inline]
    pub fn as_map(self) -> Option<&'a mut dyn Map> {
        match self {
            Self::Map(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the [`Pointer`] view, if this is an indirection.
    #[inline]
    pub fn as_pointer(self) -> Option<&'a mut dyn Pointer> {
        match self {
            Self::Pointer(value) => Some(value),
            _ => None,
        }
    }

    /// Casts the view back to the reflected value it was taken from.
    #[inline]
    pub fn into_reflect(self) -> &'a mut dyn Reflect {
        match self {
            Self::Struct(value) => value,
            Self::List(value) => value,
            Self::Array(value) => value,
            Self::Map(value) => value,
            Self::Pointer(value) => value,
            Self::Number(value) => value,
            Self::Opaque(value) => value,
        }
    }
}
