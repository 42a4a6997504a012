use alloc::string::String;

use serde_core::ser::{Error, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::Reflect;
use crate::info::short_type_name;
use crate::ops::{Map, NumberValue, ReflectRef, Struct};

/// Serializes a reflected value through its structure.
///
/// - structs: maps keyed by path names, hidden fields skipped;
/// - lists and arrays: sequences;
/// - maps: maps;
/// - `Option`, `Box` and `Dynamic`: their content, or `none`;
/// - numbers, `bool`, `char`, `String` and `()`: natively.
///
/// Other opaque values fail with a custom serializer error.
///
/// # Examples
///
/// ```
/// use jq_reflect::serde::ReflectSerializer;
///
/// let data = vec![Some(1_u8), None];
/// let text = serde_json::to_string(&ReflectSerializer::new(&data)).unwrap();
/// assert_eq!(text, "[1,null]");
/// ```
#[derive(Clone, Copy)]
pub struct ReflectSerializer<'a> {
    value: &'a dyn Reflect,
}

impl<'a> ReflectSerializer<'a> {
    /// Creates a serializer for `value`.
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }
}

impl Serialize for ReflectSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.reflect_ref() {
            ReflectRef::Struct(record) => serialize_struct(record, serializer),
            ReflectRef::List(list) => {
                let mut state = serializer.serialize_seq(Some(list.len()))?;
                for item in list.iter() {
                    state.serialize_element(&ReflectSerializer::new(item))?;
                }
                state.end()
            }
            ReflectRef::Array(array) => {
                let mut state = serializer.serialize_seq(Some(array.len()))?;
                for item in array.iter() {
                    state.serialize_element(&ReflectSerializer::new(item))?;
                }
                state.end()
            }
            ReflectRef::Map(map) => serialize_map(map, serializer),
            ReflectRef::Pointer(pointer) => match pointer.pointee() {
                Some(inner) => serializer.serialize_some(&ReflectSerializer::new(inner)),
                None => serializer.serialize_none(),
            },
            ReflectRef::Number(number) => match number.number() {
                NumberValue::Signed(v) => serializer.serialize_i64(v),
                NumberValue::Unsigned(v) => serializer.serialize_u64(v),
                NumberValue::Float(v) => serializer.serialize_f64(v),
            },
            ReflectRef::Opaque(value) => serialize_opaque(value, serializer),
        }
    }
}

fn serialize_struct<S: Serializer>(record: &dyn Struct, serializer: S) -> Result<S::Ok, S::Error> {
    let visible = record
        .field_infos()
        .iter()
        .filter(|info| !info.is_hidden())
        .count();

    let mut state = serializer.serialize_map(Some(visible))?;
    for (info, value) in record.iter_fields() {
        if let Some(name) = info.path_name() {
            state.serialize_entry(name, &ReflectSerializer::new(value))?;
        }
    }
    state.end()
}

fn serialize_map<S: Serializer>(map: &dyn Map, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_map(Some(map.len()))?;
    for (key, value) in map.iter() {
        state.serialize_entry(key, &ReflectSerializer::new(value))?;
    }
    state.end()
}

fn serialize_opaque<S: Serializer>(value: &dyn Reflect, serializer: S) -> Result<S::Ok, S::Error> {
    if let Some(v) = value.downcast_ref::<bool>() {
        serializer.serialize_bool(*v)
    } else if let Some(v) = value.downcast_ref::<String>() {
        serializer.serialize_str(v)
    } else if let Some(v) = value.downcast_ref::<char>() {
        serializer.serialize_char(*v)
    } else if value.is::<()>() {
        serializer.serialize_unit()
    } else {
        Err(S::Error::custom(format_args!(
            "cannot serialize opaque type `{}`",
            short_type_name(value.reflect_type_path())
        )))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use serde_json::json;

    use super::ReflectSerializer;
    use crate::derive::Reflect;
    use crate::ops::Dynamic;

    #[derive(Reflect, Clone)]
    struct Item {
        #[reflect(alias = "itemName")]
        name: String,
        #[reflect(alias = "-")]
        internal: u64,
        tags: Vec<char>,
        extra: Option<Dynamic>,
    }

    #[derive(Reflect, Clone)]
    #[reflect(opaque)]
    #[allow(dead_code, reason = "tests")]
    struct Handle(u32);

    fn to_json(value: &dyn crate::Reflect) -> serde_json::Value {
        serde_json::to_value(ReflectSerializer::new(value)).unwrap()
    }

    #[test]
    fn struct_uses_path_names() {
        let item = Item {
            name: "pen".into(),
            internal: 3,
            tags: vec!['a', 'b'],
            extra: Some(Dynamic::new(-1_i16)),
        };

        assert_eq!(
            to_json(&item),
            json!({ "itemName": "pen", "tags": ["a", "b"], "extra": -1 })
        );
    }

    #[test]
    fn maps_and_pointers() {
        let mut map = BTreeMap::new();
        map.insert(String::from("a"), Some(1.5_f32));
        map.insert(String::from("b"), None);

        assert_eq!(to_json(&map), json!({ "a": 1.5, "b": null }));
        assert_eq!(to_json(&Dynamic::empty()), json!(null));
        assert_eq!(to_json(&[(), ()]), json!([null, null]));
    }

    #[test]
    fn dynamic_round_trip() {
        let text = r#"{"list":[1,-2,true],"name":"x"}"#;
        let value: Dynamic = serde_json::from_str(text).unwrap();
        let back = serde_json::to_string(&ReflectSerializer::new(&value)).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn opaque_is_an_error() {
        let err = serde_json::to_value(ReflectSerializer::new(&vec![Handle(1)])).unwrap_err();
        assert_eq!(err.to_string(), "cannot serialize opaque type `Handle`");
    }
}
