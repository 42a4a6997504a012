use alloc::boxed::Box;
use core::fmt;

use crate::impls::{pointer_debug, pointer_partial_eq};
use crate::ops::Pointer;
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Option

impl<T: FromReflect + Clone> Reflect for Option<T> {
    impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        pointer_partial_eq(self, other)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Some(value) => f
                .debug_tuple("Some")
                .field(&(value as &dyn Reflect))
                .finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: FromReflect + Clone> Pointer for Option<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        self.as_ref().map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|value| value as &mut dyn Reflect)
    }

    fn pointee_or_self_mut(&mut self) -> &mut dyn Reflect {
        match *self {
            Some(ref mut value) => value,
            None => self,
        }
    }
}

impl<T: FromReflect + Clone> FromReflect for Option<T> {
    #[inline]
    fn default_value() -> Option<Self> {
        Some(None)
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: FromReflect + Clone> Reflect for Box<T> {
    impl_reflect_cast_fn!(Pointer);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        pointer_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        pointer_debug(self, f)
    }
}

impl<T: FromReflect + Clone> Pointer for Box<T> {
    #[inline]
    fn pointee(&self) -> Option<&dyn Reflect> {
        Some(&**self)
    }

    #[inline]
    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        Some(&mut **self)
    }

    #[inline]
    fn pointee_or_self_mut(&mut self) -> &mut dyn Reflect {
        &mut **self
    }
}

impl<T: FromReflect + Clone> FromReflect for Box<T> {
    #[inline]
    fn default_value() -> Option<Self> {
        T::default_value().map(Box::new)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::ops::Pointer;
    use crate::{FromReflect, Reflect};

    #[test]
    fn option_pointee() {
        let mut value = Some(String::from("a"));
        value
            .pointee_mut()
            .unwrap()
            .set(String::from("b").into_boxed_reflect())
            .unwrap();
        assert_eq!(value.as_deref(), Some("b"));
        assert_eq!(Option::<u8>::default_value(), Some(None));
    }

    #[test]
    fn box_is_always_full() {
        let value: Box<u8> = Box::new(1);
        assert!(value.pointee().unwrap().is::<u8>());
        assert_eq!(Box::<u8>::default_value(), Some(Box::new(0)));
        assert_eq!(Box::<Box<u8>>::default_value(), Some(Box::new(Box::new(0))));
    }

    #[test]
    fn pointee_or_self() {
        let mut some = Some(7_u8);
        assert!(some.pointee_or_self_mut().is::<u8>());

        let mut none = None::<u8>;
        assert!(none.pointee_or_self_mut().is::<Option<u8>>());

        let mut boxed: Box<u8> = Box::new(1);
        assert!(boxed.pointee_or_self_mut().is::<u8>());
    }
}
