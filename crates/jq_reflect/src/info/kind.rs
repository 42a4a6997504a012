use core::fmt;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Each kind corresponds to a specific reflection trait,
/// such as `Struct` or `List`, which itself corresponds
/// to the kind or structure of a type.
///
/// A [`ReflectKind`] is obtained via [`Reflect::reflect_kind`],
/// or via [`ReflectRef::kind`] and [`ReflectMut::kind`].
///
/// [`Reflect::reflect_kind`]: crate::Reflect::reflect_kind
/// [`ReflectRef::kind`]: crate::ops::ReflectRef::kind
/// [`ReflectMut::kind`]: crate::ops::ReflectMut::kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// Named fields, see [`Struct`](crate::ops::Struct).
    Struct,
    /// Growable sequence, see [`List`](crate::ops::List).
    List,
    /// Fixed-length sequence, see [`Array`](crate::ops::Array).
    Array,
    /// String-keyed entries, see [`Map`](crate::ops::Map).
    Map,
    /// Zero or one underlying value, see [`Pointer`](crate::ops::Pointer).
    Pointer,
    /// Numeric scalar, see [`Number`](crate::ops::Number).
    Number,
    /// Any other scalar.
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for kinds that can be descended into by a path segment.
    #[inline]
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::Number | Self::Opaque)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Map => f.pad("Map"),
            Self::Pointer => f.pad("Pointer"),
            Self::Number => f.pad("Number"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ReflectKind;

    #[test]
    fn display_pads() {
        assert_eq!(alloc::format!("[{:>6}]", ReflectKind::Map), "[   Map]");
        assert_eq!(alloc::format!("{}", ReflectKind::Pointer), "Pointer");
    }

    #[test]
    fn containers() {
        assert!(ReflectKind::Struct.is_container());
        assert!(ReflectKind::Pointer.is_container());
        assert!(!ReflectKind::Number.is_container());
        assert!(!ReflectKind::Opaque.is_container());
    }
}
