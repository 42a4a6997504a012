use alloc::string::String;

/// Implements [`Reflect`] and [`FromReflect`] for opaque scalar types.
///
/// The types must implement `Clone`, `PartialEq` and `Debug`. Append
/// `: default` to a type to also give it a [`default_value`] from its
/// `Default` implementation, so lists of it can grow.
///
/// # Example
///
/// ```
/// use jq_reflect::{FromReflect, Reflect, impl_reflect_opaque, info::ReflectKind};
///
/// #[derive(Clone, PartialEq, Debug, Default)]
/// struct Timestamp(u64);
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Color(u8, u8, u8);
///
/// impl_reflect_opaque!(Timestamp: default, Color);
///
/// assert_eq!(Timestamp(3).reflect_kind(), ReflectKind::Opaque);
/// assert_eq!(Timestamp::default_value(), Some(Timestamp(0)));
/// assert_eq!(Color::default_value(), None);
/// ```
///
/// [`Reflect`]: crate::Reflect
/// [`FromReflect`]: crate::FromReflect
/// [`default_value`]: crate::FromReflect::default_value
#[macro_export]
macro_rules! impl_reflect_opaque {
    (@default) => {
        #[inline]
        fn default_value() -> ::core::option::Option<Self> {
            ::core::option::Option::Some(::core::default::Default::default())
        }
    };
    ($($ty:ty $(: $default:ident)?),* $(,)?) => {$(
        impl $crate::Reflect for $ty {
            fn set(
                &mut self,
                value: $crate::__macro_exports::Box<dyn $crate::Reflect>,
            ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Reflect>> {
                *self = <dyn $crate::Reflect>::take::<Self>(value)?;
                ::core::result::Result::Ok(())
            }

            #[inline]
            fn reflect_kind(&self) -> $crate::info::ReflectKind {
                $crate::info::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
                $crate::ops::ReflectMut::Opaque(self)
            }

            #[inline]
            fn reflect_clone(&self) -> $crate::__macro_exports::Box<dyn $crate::Reflect> {
                $crate::__macro_exports::Box::new(::core::clone::Clone::clone(self))
            }

            fn reflect_partial_eq(&self, other: &dyn $crate::Reflect) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(
                    <dyn $crate::Reflect>::downcast_ref::<Self>(other)
                        .is_some_and(|other| ::core::cmp::PartialEq::eq(self, other)),
                )
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }

        impl $crate::FromReflect for $ty {
            $($crate::impl_reflect_opaque!(@$default);)?
        }
    )*};
}

impl_reflect_opaque!(bool: default, char: default, String: default, (): default);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::info::ReflectKind;
    use crate::{FromReflect, Reflect};

    #[test]
    fn opaque_scalars() {
        let mut text = String::from("a");
        assert_eq!(text.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(text.reflect_partial_eq(&String::from("a")), Some(true));

        text.set(String::from("b").into_boxed_reflect()).unwrap();
        assert_eq!(text, "b");
        assert!(text.set(true.into_boxed_reflect()).is_err());

        assert_eq!(bool::default_value(), Some(false));
        assert_eq!(<()>::default_value(), Some(()));
        assert_eq!(char::from_reflect(&'x'), Some('x'));
    }
}
