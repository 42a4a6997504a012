use core::fmt;

use crate::Reflect;
use crate::ops::{Array, List, Map, Pointer, ReflectRef, Struct};

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// # Rules
///
/// 1. If `y` is not the same type as `x`, return `Some(false)`.
/// 2. Compare all fields in declaration order.
///
/// # Example
///
/// ```ignore
/// fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
///     struct_partial_eq(self, other)
/// }
/// ```
pub fn struct_partial_eq(x: &dyn Struct, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let ReflectRef::Struct(y) = y.reflect_ref() else {
        return Some(false);
    };

    for index in 0..x.field_len() {
        let (Some(x_field), Some(y_field)) = (x.field_at(index), y.field_at(index)) else {
            return Some(false);
        };
        let result = x_field.reflect_partial_eq(y_field);
        if result != Some(true) {
            return result;
        }
    }
    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
///
/// Hidden fields are printed too, under their declared name.
pub fn struct_debug(dyn_struct: &dyn Struct, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let path = crate::info::short_type_name(dyn_struct.reflect_type_path());
    let mut debug = f.debug_struct(&path);
    for (info, field) in dyn_struct.iter_fields() {
        debug.field(info.name(), &field as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// # Rules
///
/// 1. If `y` is not the same type as `x`, return `Some(false)`.
/// 2. If lengths differ, return `Some(false)`.
/// 3. Compare items in order.
pub fn list_partial_eq(x: &dyn List, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let ReflectRef::List(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (x_value, y_value) in x.iter().zip(y.iter()) {
        let result = x_value.reflect_partial_eq(y_value);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
pub fn list_debug(dyn_list: &dyn List, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_list.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// Same rules as [`list_partial_eq`].
pub fn array_partial_eq(x: &dyn Array, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let ReflectRef::Array(y) = y.reflect_ref() else {
        return Some(false);
    };

    for (x_value, y_value) in x.iter().zip(y.iter()) {
        let result = x_value.reflect_partial_eq(y_value);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
pub fn array_debug(dyn_array: &dyn Array, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_list();
    for item in dyn_array.iter() {
        debug.entry(&item as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// # Rules
///
/// 1. If `y` is not the same type as `x`, return `Some(false)`.
/// 2. If lengths differ, return `Some(false)`.
/// 3. Every key of `x` must exist in `y` with an equal value.
pub fn map_partial_eq(x: &dyn Map, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let ReflectRef::Map(y) = y.reflect_ref() else {
        return Some(false);
    };

    if x.len() != y.len() {
        return Some(false);
    }

    for (key, val) in x.iter() {
        let Some(y_val) = y.get(key) else {
            return Some(false);
        };
        let result = val.reflect_partial_eq(y_val);
        if result != Some(true) {
            return result;
        }
    }

    Some(true)
}

/// A function use for implementing [`Reflect::reflect_debug`] .
pub fn map_debug(dyn_map: &dyn Map, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut debug = f.debug_map();
    for (key, value) in dyn_map.iter() {
        debug.entry(&key as &dyn fmt::Debug, &value as &dyn fmt::Debug);
    }
    debug.finish()
}

/// A function use for implementing [`Reflect::reflect_partial_eq`] .
///
/// # Rules
///
/// 1. If `y` is not the same type as `x`, return `Some(false)`.
/// 2. Two empty pointers are equal, an empty and a full one are not.
/// 3. Otherwise compare the pointees.
pub fn pointer_partial_eq(x: &dyn Pointer, y: &dyn Reflect) -> Option<bool> {
    if x.ty_id() != y.ty_id() {
        return Some(false);
    }
    let ReflectRef::Pointer(y) = y.reflect_ref() else {
        return Some(false);
    };

    match (x.pointee(), y.pointee()) {
        (Some(x_value), Some(y_value)) => x_value.reflect_partial_eq(y_value),
        (None, None) => Some(true),
        _ => Some(false),
    }
}

/// A function use for implementing [`Reflect::reflect_debug`] .
///
/// Prints the pointee directly, or `None`.
pub fn pointer_debug(dyn_pointer: &dyn Pointer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match dyn_pointer.pointee() {
        Some(value) => value.reflect_debug(f),
        None => f.write_str("None"),
    }
}

// -----------------------------------------------------------------------------
// Tests
