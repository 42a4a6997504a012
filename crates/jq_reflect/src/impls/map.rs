use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::fmt;
use core::hash::BuildHasher;

use crate::impls::{map_debug, map_partial_eq};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_map {
    ($ty:ty, $($generics:tt)*) => {
        impl<$($generics)*> Reflect for $ty {
            impl_reflect_cast_fn!(Map);

            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(self.clone())
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                map_partial_eq(self, other)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
                map_debug(self, f)
            }
        }

        impl<$($generics)*> Map for $ty {
            #[inline]
            fn get(&self, key: &str) -> Option<&dyn Reflect> {
                Self::get(self, key).map(|value| value as &dyn Reflect)
            }

            #[inline]
            fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
                Self::get_mut(self, key).map(|value| value as &mut dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
                Box::new(
                    Self::iter(self).map(|(key, value)| (key.as_str(), value as &dyn Reflect)),
                )
            }

            #[inline]
            fn accepts(&self, value: &dyn Reflect) -> bool {
                V::accepts(value)
            }

            #[inline]
            fn value_type_path(&self) -> &'static str {
                core::any::type_name::<V>()
            }

            fn insert_boxed(
                &mut self,
                key: &str,
                value: Box<dyn Reflect>,
            ) -> Result<Option<Box<dyn Reflect>>, Box<dyn Reflect>> {
                let value = V::take_from_reflect(value)?;
                Ok(Self::insert(self, String::from(key), value)
                    .map(|old| Box::new(old) as Box<dyn Reflect>))
            }
        }

        impl<$($generics)*> FromReflect for $ty {
            #[inline]
            fn default_value() -> Option<Self> {
                Some(<Self as Default>::default())
            }
        }
    };
}

impl_reflect_map!(BTreeMap<String, V>, V: FromReflect + Clone);

impl_reflect_map!(
    jq_utils::hash::HashMap<String, V, S>,
    V: FromReflect + Clone,
    S: BuildHasher + Default + Clone + Send + Sync + 'static
);

#[cfg(feature = "std")]
impl_reflect_map!(
    std::collections::HashMap<String, V, S>,
    V: FromReflect + Clone,
    S: BuildHasher + Default + Clone + Send + Sync + 'static
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::ops::{Dynamic, Map};
    use crate::{FromReflect, Reflect};

    #[test]
    fn insert_replaces_and_returns_old() {
        let mut data = jq_utils::hash::HashMap::<String, u8>::default();
        data.insert("a".into(), 1);

        let map: &mut dyn Map = &mut data;
        let old = map.insert_boxed("a", Box::new(2_u8)).unwrap().unwrap();
        assert_eq!(old.downcast_ref::<u8>(), Some(&1));

        let rejected = map.insert_boxed("b", Box::new(2_u16)).unwrap_err();
        assert!(rejected.is::<u16>());
        assert_eq!(map.len(), 1);
        assert_eq!(data["a"], 2);
    }

    #[test]
    fn dynamic_values_accept_anything() {
        let mut data = BTreeMap::<String, Dynamic>::new();
        let map: &mut dyn Map = &mut data;
        assert!(map.accepts(&Vec::<u8>::new()));
        map.insert_boxed("k", Box::new(true)).unwrap();
        assert_eq!(data["k"].downcast_ref::<bool>(), Some(&true));
        assert!(BTreeMap::<String, u8>::default_value().unwrap().is_empty());
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_hash_map() {
        let mut data = std::collections::HashMap::<String, i32>::new();
        data.insert("x".into(), -4);
        let value: &dyn Reflect = &data;
        let map = value.reflect_ref().as_map().unwrap();
        assert_eq!(map.get("x").unwrap().downcast_ref::<i32>(), Some(&-4));
        assert_eq!(map.value_type_path(), "i32");
    }
}
