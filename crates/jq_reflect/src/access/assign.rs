use crate::Reflect;
use crate::access::traverse::Location;
use crate::access::{AccessError, AccessOptions};
use crate::ops::{Map, ReflectMut, ReflectRef, Struct, unwrap_dynamic};

/// Stores `value` at `location`, returning whether anything changed.
///
/// A non-empty [`Dynamic`](crate::ops::Dynamic) value is replaced by its
/// content first.
pub(crate) fn assign(
    location: Location<'_>,
    value: &dyn Reflect,
    options: &AccessOptions,
) -> Result<bool, AccessError> {
    let value = unwrap_dynamic(value);
    match location {
        Location::Slot(slot) => assign_slot(slot, value, options),
        Location::Entry { map, key } => assign_entry(map, &key, value),
    }
}

/// Same type, or a slot that accepts any type.
fn is_direct(slot: &dyn Reflect, value: &dyn Reflect) -> bool {
    slot.ty_id() == value.ty_id()
        || matches!(slot.reflect_ref(), ReflectRef::Pointer(pointer) if pointer.is_dynamic())
}

fn assign_slot(
    slot: &mut dyn Reflect,
    value: &dyn Reflect,
    options: &AccessOptions,
) -> Result<bool, AccessError> {
    let slot_type = slot.reflect_type_path();

    if is_direct(slot, value) {
        if slot.reflect_partial_eq(value) == Some(true) {
            return Ok(false);
        }
        return match slot.set(value.reflect_clone()) {
            Ok(()) => Ok(true),
            Err(rejected) => Err(AccessError::type_mismatch(
                slot_type,
                rejected.reflect_type_path(),
            )),
        };
    }

    match (slot.reflect_mut(), value.reflect_ref()) {
        (ReflectMut::Struct(record), ReflectRef::Map(entries)) => merge(record, entries, options),
        (ReflectMut::Number(number), ReflectRef::Number(source)) => {
            let source = source.number();
            log::debug!("coercing {source} into {slot_type}");
            Ok(number.set_number(source))
        }
        _ => Err(AccessError::type_mismatch(
            slot_type,
            value.reflect_type_path(),
        )),
    }
}

/// Assigns every map entry to the struct fields it addresses.
///
/// Keys addressing no field are ignored, the first error aborts the merge
/// and fields merged before it keep their new values.
fn merge(
    record: &mut dyn Struct,
    entries: &dyn Map,
    options: &AccessOptions,
) -> Result<bool, AccessError> {
    log::debug!(
        "merging {} entries into {}",
        entries.len(),
        record.reflect_type_path()
    );

    let infos = record.field_infos();
    let mut changed = false;

    for (key, value) in entries.iter() {
        let value = unwrap_dynamic(value);
        let mut matched = false;

        for (index, info) in infos.iter().enumerate() {
            if !info.matches(key, options.field_case) {
                continue;
            }
            matched = true;
            if let Some(field) = record.field_at_mut(index) {
                changed |= assign_slot(field, value, options)?;
            }
        }

        if !matched {
            log::trace!("ignoring {key:?}, no such field in {}", record.reflect_type_path());
        }
    }

    Ok(changed)
}

fn assign_entry(map: &mut dyn Map, key: &str, value: &dyn Reflect) -> Result<bool, AccessError> {
    let value_type = map.value_type_path();

    if !map.accepts(value) {
        return Err(AccessError::type_mismatch(
            value_type,
            value.reflect_type_path(),
        ));
    }
    if map
        .get(key)
        .and_then(|current| current.reflect_partial_eq(value))
        == Some(true)
    {
        return Ok(false);
    }

    match map.insert_boxed(key, value.reflect_clone()) {
        Ok(_) => Ok(true),
        Err(rejected) => Err(AccessError::type_mismatch(
            value_type,
            rejected.reflect_type_path(),
        )),
    }
}
