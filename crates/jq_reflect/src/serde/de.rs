use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde_core::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

use crate::ops::Dynamic;

/// A [`Visitor`] building [`Dynamic`] trees.
struct DynamicVisitor;

impl<'de> Visitor<'de> for DynamicVisitor {
    type Value = Dynamic;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any self-describing value")
    }

    #[inline]
    fn visit_bool<E: Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Dynamic::new(v))
    }

    #[inline]
    fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Dynamic::new(v))
    }

    #[inline]
    fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Dynamic::new(v))
    }

    #[inline]
    fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Dynamic::new(v))
    }

    #[inline]
    fn visit_char<E: Error>(self, v: char) -> Result<Self::Value, E> {
        Ok(Dynamic::new(v))
    }

    #[inline]
    fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Dynamic::new(String::from(v)))
    }

    #[inline]
    fn visit_string<E: Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(Dynamic::new(v))
    }

    #[inline]
    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(Dynamic::empty())
    }

    #[inline]
    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(Dynamic::empty())
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Dynamic::deserialize(deserializer)
    }

    #[inline]
    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Dynamic::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items: Vec<Dynamic> = Vec::with_capacity(seq.size_hint().unwrap_or_default());
        while let Some(item) = seq.next_element::<Dynamic>()? {
            items.push(item);
        }
        Ok(Dynamic::from_boxed(Box::new(items)))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: BTreeMap<String, Dynamic> = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, Dynamic>()? {
            entries.insert(key, value);
        }
        Ok(Dynamic::from_boxed(Box::new(entries)))
    }
}

impl<'de> Deserialize<'de> for Dynamic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DynamicVisitor)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::ops::Dynamic;

    #[test]
    fn json_tree() {
        let value: Dynamic =
            serde_json::from_str(r#"{ "n": null, "list": [1, -1, 0.5], "text": "t", "ok": false }"#)
                .unwrap();

        let map = value.downcast_ref::<BTreeMap<String, Dynamic>>().unwrap();
        assert_eq!(map.len(), 4);
        assert!(map["n"].is_empty());
        assert_eq!(map["text"].downcast_ref::<String>().unwrap(), "t");
        assert_eq!(map["ok"].downcast_ref::<bool>(), Some(&false));

        let list = map["list"].downcast_ref::<Vec<Dynamic>>().unwrap();
        assert_eq!(list[0].downcast_ref::<u64>(), Some(&1));
        assert_eq!(list[1].downcast_ref::<i64>(), Some(&-1));
        assert_eq!(list[2].downcast_ref::<f64>(), Some(&0.5));
    }

    #[test]
    fn ron_tree() {
        let value: Dynamic = ron::from_str(r#"[Some('c'), None, "s"]"#).unwrap();

        let list = value.downcast_ref::<Vec<Dynamic>>().unwrap();
        assert_eq!(list[0].downcast_ref::<char>(), Some(&'c'));
        assert!(list[1].is_empty());
        assert_eq!(list[2].downcast_ref::<String>().unwrap(), "s");
    }

    #[test]
    fn scalar_root() {
        let value: Dynamic = serde_json::from_str("12").unwrap();
        assert_eq!(value.downcast_ref::<u64>(), Some(&12));

        let value: Dynamic = serde_json::from_str("null").unwrap();
        assert!(value.is_empty());
    }
}
