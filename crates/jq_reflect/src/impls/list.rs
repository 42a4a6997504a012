use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use crate::impls::{list_debug, list_partial_eq};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_list {
    ($ty:ident, $access:ty, $push:ident) => {
        impl<T: FromReflect + Clone> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);

            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(self.clone())
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                list_partial_eq(self, other)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
                list_debug(self, f)
            }
        }

        impl<T: FromReflect + Clone> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                <$access>::get(self, index).map(|value| value as &dyn Reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                <$access>::get_mut(self, index).map(|value| value as &mut dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                let value = T::take_from_reflect(value)?;
                <$ty<T>>::$push(self, value);
                Ok(())
            }

            fn push_default(&mut self) -> bool {
                match T::default_value() {
                    Some(value) => {
                        <$ty<T>>::$push(self, value);
                        true
                    }
                    None => false,
                }
            }
        }

        impl<T: FromReflect + Clone> FromReflect for $ty<T> {
            #[inline]
            fn default_value() -> Option<Self> {
                Some(<$ty<T>>::new())
            }
        }
    };
}

impl_reflect_list!(Vec, [T], push);
impl_reflect_list!(VecDeque, VecDeque<T>, push_back);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::VecDeque;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::ops::{Dynamic, List};
    use crate::FromReflect;

    #[derive(Clone, PartialEq, Debug)]
    struct NoDefault;

    crate::impl_reflect_opaque!(NoDefault);

    #[test]
    fn push_default_needs_default_value() {
        let mut names: Vec<String> = vec![];
        assert!(List::push_default(&mut names));
        assert_eq!(names, [""]);

        let mut items = vec![NoDefault];
        assert!(!List::push_default(&mut items));
        assert_eq!(items.len(), 1);

        let mut slots: VecDeque<Dynamic> = VecDeque::new();
        assert!(List::push_default(&mut slots));
        assert!(slots[0].is_empty());
    }

    #[test]
    fn push_converts_through_from_reflect() {
        let mut slots: Vec<Dynamic> = vec![];
        List::push(&mut slots, Box::new(5_u8)).unwrap();
        assert_eq!(slots[0].downcast_ref::<u8>(), Some(&5));

        let mut numbers: Vec<u8> = vec![];
        let rejected = List::push(&mut numbers, Box::new(5_i8)).unwrap_err();
        assert!(rejected.is::<i8>());
    }

    #[test]
    fn nested_lists() {
        let list: &dyn List = &vec![vec![1_u8], vec![]];
        assert_eq!(list.len(), 2);
        assert_eq!(list.iter().count(), 2);
        assert_eq!(Vec::<Vec<u8>>::default_value(), Some(vec![]));
        assert_eq!(
            list.reflect_partial_eq(&vec![vec![1_u8], vec![]]),
            Some(true)
        );
    }
}
