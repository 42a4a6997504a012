use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::Reflect;
use crate::access::path::parse_index;
use crate::access::{AccessError, AccessOptions};
use crate::ops::{Map, ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Location

/// Where a write lands.
pub(crate) enum Location<'r> {
    /// A value inside a struct, list, array or pointer, or the root.
    Slot(&'r mut dyn Reflect),
    /// A key of a map; writing re-inserts the key.
    Entry { map: &'r mut dyn Map, key: String },
}

// -----------------------------------------------------------------------------
// Read traversal

/// Resolves every segment starting from `root`, without modifying anything.
pub(crate) fn resolve<'r, 's>(
    root: &'r dyn Reflect,
    segments: impl IntoIterator<Item = &'s str>,
    options: &AccessOptions,
) -> Result<&'r dyn Reflect, AccessError> {
    let mut current = root;
    for segment in segments {
        current = step(current, segment, options)?;
    }
    Ok(current)
}

fn step<'r>(
    mut current: &'r dyn Reflect,
    segment: &str,
    options: &AccessOptions,
) -> Result<&'r dyn Reflect, AccessError> {
    let case = options.field_case;
    loop {
        log::trace!("resolving {segment:?} in {}", current.reflect_type_path());
        let found = match current.reflect_ref() {
            ReflectRef::Pointer(pointer) => match pointer.pointee() {
                Some(inner) => {
                    current = inner;
                    continue;
                }
                None => None,
            },
            ReflectRef::List(list) => parse_index(segment).and_then(|index| list.get(index)),
            ReflectRef::Array(array) => parse_index(segment).and_then(|index| array.get(index)),
            ReflectRef::Struct(record) => record
                .index_of(segment, case)
                .and_then(|index| record.field_at(index)),
            ReflectRef::Map(map) => map
                .find_key(segment, case)
                .and_then(|key| map.get(key)),
            ReflectRef::Number(_) | ReflectRef::Opaque(_) => None,
        };
        return found.ok_or_else(|| AccessError::path_not_found(segment, current.reflect_type_path()));
    }
}

// -----------------------------------------------------------------------------
// Mutable traversal

/// Resolves every segment starting from `root` for in-place mutation.
///
/// Nothing grows and map values are reached through their keys.
pub(crate) fn resolve_mut<'r, 's>(
    root: &'r mut dyn Reflect,
    segments: impl IntoIterator<Item = &'s str>,
    options: &AccessOptions,
) -> Result<&'r mut dyn Reflect, AccessError> {
    let mut current = root;
    for segment in segments {
        current = step_mut(current, segment, options, false)?;
    }
    Ok(current)
}

/// Resolves every segment starting from `root` for a write.
///
/// Lists may grow (see [`AccessOptions::growth`]) and a map key addressed by
/// the last segment resolves to [`Location::Entry`]. Growth is not rolled
/// back if a later segment fails.
pub(crate) fn resolve_write<'r, 's>(
    root: &'r mut dyn Reflect,
    segments: impl IntoIterator<Item = &'s str>,
    options: &AccessOptions,
) -> Result<Location<'r>, AccessError> {
    let mut current = root;
    let mut segments = segments.into_iter().peekable();

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            return step_last(current, segment, options, options.may_grow(true));
        }
        current = step_mut(current, segment, options, options.may_grow(false))?;
    }

    Ok(Location::Slot(current))
}

fn step_mut<'r>(
    mut current: &'r mut dyn Reflect,
    segment: &str,
    options: &AccessOptions,
    grow: bool,
) -> Result<&'r mut dyn Reflect, AccessError> {
    loop {
        let type_path = current.reflect_type_path();
        log::trace!("resolving {segment:?} in {type_path} for mutation");
        let found = match current.reflect_mut() {
            ReflectMut::Pointer(pointer) => match pointer.pointee_mut() {
                Some(inner) => {
                    current = inner;
                    continue;
                }
                None => None,
            },
            kind => child_mut(kind, segment, options, grow, type_path),
        };
        return found.ok_or_else(|| AccessError::path_not_found(segment, type_path));
    }
}

/// Like [`step_mut`], but a matching map key becomes [`Location::Entry`].
fn step_last<'r>(
    mut current: &'r mut dyn Reflect,
    segment: &str,
    options: &AccessOptions,
    grow: bool,
) -> Result<Location<'r>, AccessError> {
    loop {
        let type_path = current.reflect_type_path();
        log::trace!("resolving {segment:?} in {type_path} for a write");
        let found = match current.reflect_mut() {
            ReflectMut::Pointer(pointer) => match pointer.pointee_mut() {
                Some(inner) => {
                    current = inner;
                    continue;
                }
                None => None,
            },
            ReflectMut::Map(map) => {
                match map.find_key(segment, options.field_case).map(ToOwned::to_owned) {
                    Some(key) => return Ok(Location::Entry { map, key }),
                    None => None,
                }
            }
            kind => child_mut(kind, segment, options, grow, type_path),
        };
        return found
            .map(Location::Slot)
            .ok_or_else(|| AccessError::path_not_found(segment, type_path));
    }
}

fn child_mut<'r>(
    kind: ReflectMut<'r>,
    segment: &str,
    options: &AccessOptions,
    grow: bool,
    type_path: &str,
) -> Option<&'r mut dyn Reflect> {
    let case = options.field_case;
    match kind {
        ReflectMut::List(list) => {
            let index = parse_index(segment)?;
            if grow && index == list.len() && list.push_default() {
                log::debug!("grew {type_path} to {} elements", list.len());
            }
            list.get_mut(index)
        }
        ReflectMut::Array(array) => array.get_mut(parse_index(segment)?),
        ReflectMut::Struct(record) => {
            let index = record.index_of(segment, case)?;
            record.field_at_mut(index)
        }
        ReflectMut::Map(map) => {
            let key = map.find_key(segment, case)?.to_owned();
            map.get_mut(&key)
        }
        ReflectMut::Pointer(_) | ReflectMut::Number(_) | ReflectMut::Opaque(_) => None,
    }
}
