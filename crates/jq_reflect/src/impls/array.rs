use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::impls::{array_debug, array_partial_eq};
use crate::ops::Array;
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

impl<T: FromReflect + Clone, const N: usize> Reflect for [T; N] {
    impl_reflect_cast_fn!(Array);

    #[inline]
    fn reflect_clone(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        array_partial_eq(self, other)
    }

    #[inline]
    fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
        array_debug(self, f)
    }
}

impl<T: FromReflect + Clone, const N: usize> Array for [T; N] {
    #[inline]
    fn get(&self, index: usize) -> Option<&dyn Reflect> {
        self.as_slice().get(index).map(|value| value as &dyn Reflect)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.as_mut_slice()
            .get_mut(index)
            .map(|value| value as &mut dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        N
    }
}

impl<T: FromReflect + Clone, const N: usize> FromReflect for [T; N] {
    fn default_value() -> Option<Self> {
        let items = (0..N)
            .map(|_| T::default_value())
            .collect::<Option<Vec<T>>>()?;
        items.try_into().ok()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::FromReflect;
    use crate::ops::Array;

    #[test]
    fn array_access() {
        let mut data = [1_u16, 2, 3];
        let array: &mut dyn Array = &mut data;
        assert_eq!(array.len(), 3);
        assert!(array.get(3).is_none());

        *array.get_mut(2).unwrap().downcast_mut::<u16>().unwrap() = 9;
        assert_eq!(data, [1, 2, 9]);
    }

    #[test]
    fn array_default_value() {
        assert_eq!(<[u8; 2]>::default_value(), Some([0, 0]));
        assert_eq!(<[bool; 0]>::default_value(), Some([]));
    }
}
