use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use jq_utils::vec::FastVec;

use crate::Reflect;
use crate::access::assign::assign;
use crate::access::path::segments;
use crate::access::traverse::{resolve, resolve_mut, resolve_write};
use crate::access::{AccessError, AccessOptions};
use crate::ops::{Array, List, Map, Pointer, ReflectRef, Struct};
use crate::ops::{unwrap_dynamic, unwrap_dynamic_mut};

// -----------------------------------------------------------------------------
// Core operations

#[inline(never)]
fn read_in<'r, 's>(
    root: &'r dyn Reflect,
    path: impl IntoIterator<Item = &'s str>,
    options: &AccessOptions,
) -> Result<&'r dyn Reflect, AccessError> {
    resolve(root, path, options).map(unwrap_dynamic)
}

#[inline(never)]
fn read_mut_in<'r, 's>(
    root: &'r mut dyn Reflect,
    path: impl IntoIterator<Item = &'s str>,
    options: &AccessOptions,
) -> Result<&'r mut dyn Reflect, AccessError> {
    resolve_mut(root, path, options).map(unwrap_dynamic_mut)
}

#[inline(never)]
fn write_in<'s>(
    root: &mut dyn Reflect,
    path: impl IntoIterator<Item = &'s str>,
    value: &dyn Reflect,
    options: &AccessOptions,
) -> Result<bool, AccessError> {
    let mut path = path.into_iter().peekable();
    if path.peek().is_some() && is_empty_pointer(root) {
        return Err(AccessError::InvalidReceiver);
    }
    let location = resolve_write(root, path, options)?;
    assign(location, value, options)
}

fn is_empty_pointer(value: &dyn Reflect) -> bool {
    matches!(value.reflect_ref(), ReflectRef::Pointer(pointer) if pointer.pointee().is_none())
}

/// Downcasts the located value, looking into a terminal [`Dynamic`] only when
/// the slot itself is not a `T`.
///
/// [`Dynamic`]: crate::ops::Dynamic
fn read_as_in<'r, 's, T: Reflect>(
    root: &'r dyn Reflect,
    path: impl IntoIterator<Item = &'s str>,
    options: &AccessOptions,
) -> Result<&'r T, AccessError> {
    let raw = resolve(root, path, options)?;
    if let Some(value) = raw.downcast_ref::<T>() {
        return Ok(value);
    }
    let value = unwrap_dynamic(raw);
    value
        .downcast_ref::<T>()
        .ok_or_else(|| AccessError::type_mismatch(core::any::type_name::<T>(), value.reflect_type_path()))
}

fn read_mut_as_in<'r, 's, T: Reflect>(
    root: &'r mut dyn Reflect,
    path: impl IntoIterator<Item = &'s str>,
    options: &AccessOptions,
) -> Result<&'r mut T, AccessError> {
    let raw = resolve_mut(root, path, options)?;
    let value = if raw.is::<T>() { raw } else { unwrap_dynamic_mut(raw) };
    let actual = value.reflect_type_path();
    value
        .downcast_mut::<T>()
        .ok_or_else(|| AccessError::type_mismatch(core::any::type_name::<T>(), actual))
}

// -----------------------------------------------------------------------------
// Free functions

/// Returns a reference to the value at `path`.
///
/// Pointers along the way are looked through, and a non-empty
/// [`Dynamic`](crate::ops::Dynamic) at the end is replaced by its content.
/// The empty path returns `root` itself.
///
/// # Examples
///
/// ```
/// use jq_reflect::access;
///
/// let data = vec![Some(vec![1_u8, 2]), None];
///
/// let value = access::read(&data, "0.1").unwrap();
/// assert_eq!(value.downcast_ref::<u8>(), Some(&2));
///
/// assert!(access::read(&data, "1.0").is_err());
/// ```
#[inline]
pub fn read<'r>(root: &'r dyn Reflect, path: &str) -> Result<&'r dyn Reflect, AccessError> {
    read_in(root, segments(path), &AccessOptions::DEFAULT)
}

/// Returns a typed reference to the value at `path`.
///
/// Fails with [`AccessError::TypeMismatch`] if the value is not a `T`.
///
/// # Examples
///
/// ```
/// use jq_reflect::access::{self, AccessError};
///
/// let data = vec![String::from("reading")];
/// assert_eq!(access::read_as::<String>(&data, "0").unwrap(), "reading");
///
/// let err = access::read_as::<i32>(&data, "0").unwrap_err();
/// assert_eq!(err.to_string(), "expected i32, not String");
/// ```
#[inline]
pub fn read_as<'r, T: Reflect>(root: &'r dyn Reflect, path: &str) -> Result<&'r T, AccessError> {
    AccessOptions::DEFAULT.read_as(root, path)
}

/// Returns a mutable reference to the value at `path`.
///
/// Unlike [`write`], this never grows lists.
#[inline]
pub fn read_mut<'r>(
    root: &'r mut dyn Reflect,
    path: &str,
) -> Result<&'r mut dyn Reflect, AccessError> {
    read_mut_in(root, segments(path), &AccessOptions::DEFAULT)
}

/// Returns a typed mutable reference to the value at `path`.
#[inline]
pub fn read_mut_as<'r, T: Reflect>(
    root: &'r mut dyn Reflect,
    path: &str,
) -> Result<&'r mut T, AccessError> {
    AccessOptions::DEFAULT.read_mut_as(root, path)
}

/// Stores a clone of `value` at `path`, returning whether anything changed.
///
/// The value is stored as is when the destination has the same type or is
/// a [`Dynamic`](crate::ops::Dynamic), a map is merged into a struct field
/// by field, and numbers are converted to the destination's number type.
/// Anything else is an [`AccessError::TypeMismatch`].
///
/// Writing one past the end of a list appends an element.
///
/// # Examples
///
/// ```
/// use jq_reflect::access;
///
/// let mut data = vec![1_u8, 2];
///
/// assert!(access::write(&mut data, "2", &3_u8).unwrap());
/// assert!(access::write(&mut data, "0", &7.9_f64).unwrap());
/// assert!(!access::write(&mut data, "0", &7_u8).unwrap());
///
/// assert_eq!(data, [7, 2, 3]);
/// ```
#[inline]
pub fn write(root: &mut dyn Reflect, path: &str, value: &dyn Reflect) -> Result<bool, AccessError> {
    write_in(root, segments(path), value, &AccessOptions::DEFAULT)
}

// -----------------------------------------------------------------------------
// Configured operations

impl AccessOptions {
    /// [`read`] with these options.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use jq_reflect::access::AccessOptions;
    /// use jq_reflect::info::FieldCase;
    ///
    /// let mut data = BTreeMap::<String, u8>::new();
    /// data.insert("Key".into(), 1);
    ///
    /// let options = AccessOptions::new().with_field_case(FieldCase::Insensitive);
    /// assert!(options.read(&data, "key").is_ok());
    /// assert!(AccessOptions::new().read(&data, "key").is_err());
    /// ```
    #[inline]
    pub fn read<'r>(&self, root: &'r dyn Reflect, path: &str) -> Result<&'r dyn Reflect, AccessError> {
        read_in(root, segments(path), self)
    }

    /// [`read_as`] with these options.
    #[inline]
    pub fn read_as<'r, T: Reflect>(
        &self,
        root: &'r dyn Reflect,
        path: &str,
    ) -> Result<&'r T, AccessError> {
        read_as_in(root, segments(path), self)
    }

    /// [`read_mut`] with these options.
    #[inline]
    pub fn read_mut<'r>(
        &self,
        root: &'r mut dyn Reflect,
        path: &str,
    ) -> Result<&'r mut dyn Reflect, AccessError> {
        read_mut_in(root, segments(path), self)
    }

    /// [`read_mut_as`] with these options.
    #[inline]
    pub fn read_mut_as<'r, T: Reflect>(
        &self,
        root: &'r mut dyn Reflect,
        path: &str,
    ) -> Result<&'r mut T, AccessError> {
        read_mut_as_in(root, segments(path), self)
    }

    /// [`write`] with these options.
    #[inline]
    pub fn write(
        &self,
        root: &mut dyn Reflect,
        path: &str,
        value: &dyn Reflect,
    ) -> Result<bool, AccessError> {
        write_in(root, segments(path), value, self)
    }
}

// -----------------------------------------------------------------------------
// PathAccessor

/// A parsed path, reusable across values and calls.
///
/// Carries the [`AccessOptions`] its operations use.
///
/// # Examples
///
/// ```
/// use jq_reflect::access::PathAccessor;
///
/// let accessor = PathAccessor::parse_static("1.0");
/// assert_eq!(accessor.len(), 2);
///
/// let mut data = vec![vec![0_i32], vec![1]];
/// assert_eq!(*accessor.read_as::<i32>(&data).unwrap(), 1);
///
/// accessor.write(&mut data, &5_i32).unwrap();
/// assert_eq!(data[1], [5]);
///
/// // reuse
/// data.swap(0, 1);
/// assert_eq!(*accessor.read_as::<i32>(&data).unwrap(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathAccessor {
    segments: Box<[Cow<'static, str>]>,
    options: AccessOptions,
}

impl PathAccessor {
    /// Parses the path, copying every segment.
    ///
    /// For `&'static str` paths, consider using [`parse_static`].
    ///
    /// [`parse_static`]: PathAccessor::parse_static
    pub fn parse(path: &str) -> Self {
        let mut vec: FastVec<Cow<'static, str>, 8> = FastVec::new();
        let data = vec.get();

        for segment in segments(path) {
            data.push(Cow::Owned(String::from(segment)));
        }

        Self {
            segments: vec.into_boxed_slice(),
            options: AccessOptions::DEFAULT,
        }
    }

    /// Parses the path, borrowing the segments without creating additional
    /// [`String`]s.
    pub fn parse_static(path: &'static str) -> Self {
        let mut vec: FastVec<Cow<'static, str>, 8> = FastVec::new();
        let data = vec.get();

        for segment in segments(path) {
            data.push(Cow::Borrowed(segment));
        }

        Self {
            segments: vec.into_boxed_slice(),
            options: AccessOptions::DEFAULT,
        }
    }

    /// Replaces the options used by this accessor.
    #[inline]
    pub fn with_options(mut self, options: AccessOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options used by this accessor.
    #[inline]
    pub const fn options(&self) -> &AccessOptions {
        &self.options
    }

    /// Returns the number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if this accessor addresses the root itself.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments.
    #[inline]
    pub fn segments(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.segments.iter().map(|segment| segment.as_ref())
    }

    /// See [`read`](crate::access::read).
    #[inline]
    pub fn read<'r>(&self, root: &'r dyn Reflect) -> Result<&'r dyn Reflect, AccessError> {
        read_in(root, self.segments(), &self.options)
    }

    /// See [`read_as`](crate::access::read_as).
    #[inline]
    pub fn read_as<'r, T: Reflect>(&self, root: &'r dyn Reflect) -> Result<&'r T, AccessError> {
        read_as_in(root, self.segments(), &self.options)
    }

    /// See [`read_mut`](crate::access::read_mut).
    #[inline]
    pub fn read_mut<'r>(&self, root: &'r mut dyn Reflect) -> Result<&'r mut dyn Reflect, AccessError> {
        read_mut_in(root, self.segments(), &self.options)
    }

    /// See [`read_mut_as`](crate::access::read_mut_as).
    #[inline]
    pub fn read_mut_as<'r, T: Reflect>(
        &self,
        root: &'r mut dyn Reflect,
    ) -> Result<&'r mut T, AccessError> {
        read_mut_as_in(root, self.segments(), &self.options)
    }

    /// See [`write`](crate::access::write).
    #[inline]
    pub fn write(&self, root: &mut dyn Reflect, value: &dyn Reflect) -> Result<bool, AccessError> {
        write_in(root, self.segments(), value, &self.options)
    }

    /// Concat two `PathAccessor`, keeping the options of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use jq_reflect::access::PathAccessor;
    /// let a1 = PathAccessor::parse_static("address");
    /// let a2 = PathAccessor::parse("city");
    /// let a = a1.concat(a2);
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(a.to_string(), "address.city");
    /// ```
    pub fn concat(self, other: PathAccessor) -> Self {
        let mut vec: FastVec<Cow<'static, str>, 12> = FastVec::new();
        let data = vec.get();
        data.extend(self.segments);
        data.extend(other.segments);
        Self {
            segments: vec.into_boxed_slice(),
            options: self.options,
        }
    }
}

impl fmt::Display for PathAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Trait for once multi-layer accessing

/// Path access for every reflected value, parsing the path on each call.
///
/// Uses [`AccessOptions::DEFAULT`]; see [`AccessOptions`] for the
/// configured variants and [`PathAccessor`] for reusable paths.
///
/// # Examples
///
/// ```
/// use jq_reflect::{derive::Reflect, access::ReflectPathAccess};
///
/// #[derive(Reflect, Clone)]
/// struct Foo { id: u32, data: Vec<Option<bool>> }
///
/// let mut foo = Foo { id: 1, data: vec![Some(true), None] };
///
/// assert_eq!(*foo.read_path_as::<bool>("data.0").unwrap(), true);
/// assert!(foo.read_path("data.1.x").is_err());
///
/// assert!(foo.write_path("id", &2_u32).unwrap());
/// assert!(foo.write_path("data.2", &Some(false)).unwrap());
/// assert_eq!(foo.data.len(), 3);
/// ```
pub trait ReflectPathAccess {
    /// See [`read`](crate::access::read).
    fn read_path(&self, path: &str) -> Result<&dyn Reflect, AccessError>;

    /// See [`read_as`](crate::access::read_as).
    fn read_path_as<T: Reflect>(&self, path: &str) -> Result<&T, AccessError>;

    /// See [`read_mut`](crate::access::read_mut).
    fn read_path_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, AccessError>;

    /// See [`read_mut_as`](crate::access::read_mut_as).
    fn read_path_mut_as<T: Reflect>(&mut self, path: &str) -> Result<&mut T, AccessError>;

    /// See [`write`](crate::access::write).
    fn write_path(&mut self, path: &str, value: &dyn Reflect) -> Result<bool, AccessError>;
}

impl ReflectPathAccess for dyn Reflect {
    #[inline]
    fn read_path(&self, path: &str) -> Result<&dyn Reflect, AccessError> {
        read(self, path)
    }

    #[inline]
    fn read_path_as<T: Reflect>(&self, path: &str) -> Result<&T, AccessError> {
        read_as::<T>(self, path)
    }

    #[inline]
    fn read_path_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, AccessError> {
        read_mut(self, path)
    }

    #[inline]
    fn read_path_mut_as<T: Reflect>(&mut self, path: &str) -> Result<&mut T, AccessError> {
        read_mut_as::<T>(self, path)
    }

    #[inline]
    fn write_path(&mut self, path: &str, value: &dyn Reflect) -> Result<bool, AccessError> {
        write(self, path, value)
    }
}

// -----------------------------------------------------------------------------
// Implementation for reflect type

macro_rules! impl_reflect_path_access {
    () => {
        #[inline(always)]
        fn read_path(&self, path: &str) -> Result<&dyn Reflect, AccessError> {
            <dyn Reflect as ReflectPathAccess>::read_path(self, path)
        }

        #[inline(always)]
        fn read_path_as<T: Reflect>(&self, path: &str) -> Result<&T, AccessError> {
            <dyn Reflect as ReflectPathAccess>::read_path_as::<T>(self, path)
        }

        #[inline(always)]
        fn read_path_mut(&mut self, path: &str) -> Result<&mut dyn Reflect, AccessError> {
            <dyn Reflect as ReflectPathAccess>::read_path_mut(self, path)
        }

        #[inline(always)]
        fn read_path_mut_as<T: Reflect>(&mut self, path: &str) -> Result<&mut T, AccessError> {
            <dyn Reflect as ReflectPathAccess>::read_path_mut_as::<T>(self, path)
        }

        #[inline(always)]
        fn write_path(&mut self, path: &str, value: &dyn Reflect) -> Result<bool, AccessError> {
            <dyn Reflect as ReflectPathAccess>::write_path(self, path, value)
        }
    };
    (dyn $name:ident) => {
        impl ReflectPathAccess for dyn $name {
            impl_reflect_path_access!();
        }
    };
    (T: $name:ident) => {
        impl<P: Sized + $name> ReflectPathAccess for P {
            impl_reflect_path_access!();
        }
    };
}

impl_reflect_path_access!(T: Reflect);

impl_reflect_path_access!(dyn Struct);
impl_reflect_path_access!(dyn List);
impl_reflect_path_access!(dyn Array);
impl_reflect_path_access!(dyn Map);
impl_reflect_path_access!(dyn Pointer);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::access::{self, AccessError, AccessOptions, FieldCase, Growth};
    use crate::access::{PathAccessor, ReflectPathAccess};
    use crate::derive::Reflect;
    use crate::ops::Dynamic;

    // -------------------------------------------------------------------------
    // Fixtures

    #[derive(Reflect, Clone, Debug, Default, PartialEq)]
    #[reflect(default, partial_eq, debug)]
    struct Address {
        street: String,
        city: String,
        #[reflect(alias = "zip_code")]
        zip: u32,
    }

    #[derive(Reflect, Clone, Debug, Default, PartialEq)]
    #[reflect(default)]
    struct Person {
        name: String,
        age: i32,
        hobbies: Vec<String>,
        address: Address,
        #[reflect(alias = "nick")]
        nickname: Option<String>,
        #[reflect(alias = "-")]
        secret: String,
        scores: BTreeMap<String, f64>,
        meta: Dynamic,
        friends: Vec<Address>,
        spouse: Option<Box<Person>>,
    }

    #[derive(Reflect, Clone, Debug, PartialEq)]
    #[reflect(opaque, partial_eq, debug)]
    struct Token(u8);

    #[derive(Reflect, Clone, Default, serde::Deserialize)]
    #[reflect(default)]
    struct Account {
        #[serde(rename = "userName")]
        user_name: String,
        #[serde(skip)]
        cache: u32,
        #[serde(rename = "userId")]
        #[reflect(alias = "id")]
        user_id: u64,
    }

    fn person() -> Person {
        let mut scores = BTreeMap::new();
        scores.insert(String::from("math"), 90.5);

        Person {
            name: "John Doe".into(),
            age: 30,
            hobbies: vec!["reading".into(), "hiking".into()],
            address: Address {
                street: "123 Main St".into(),
                city: "Anytown".into(),
                zip: 12345,
            },
            nickname: None,
            secret: "hunter2".into(),
            scores,
            meta: Dynamic::empty(),
            friends: Vec::new(),
            spouse: None,
        }
    }

    fn json(text: &str) -> Dynamic {
        serde_json::from_str(text).unwrap()
    }

    fn not_found(segment: &str, type_name: &str) -> AccessError {
        AccessError::PathNotFound {
            segment: segment.into(),
            type_name: type_name.into(),
        }
    }

    fn mismatch(expected: &str, actual: &str) -> AccessError {
        AccessError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    // -------------------------------------------------------------------------
    // Reads

    #[test]
    fn empty_path_is_root() {
        let mut person = person();

        let root = person.read_path("").unwrap();
        assert!(core::ptr::addr_eq(root, &person));
        assert_eq!(root.downcast_ref::<Person>(), Some(&person));

        let root = access::read_mut(&mut person, "").unwrap();
        assert!(root.is::<Person>());
    }

    #[test]
    fn read_nested() {
        let mut person = person();
        person.friends.push(Address {
            city: "Bergen".into(),
            ..Address::default()
        });

        assert_eq!(person.read_path_as::<String>("name").unwrap(), "John Doe");
        assert_eq!(person.read_path_as::<String>("hobbies.1").unwrap(), "hiking");
        assert_eq!(person.read_path_as::<String>("address.city").unwrap(), "Anytown");
        assert_eq!(*person.read_path_as::<f64>("scores.math").unwrap(), 90.5);
        assert_eq!(person.read_path_as::<String>("friends.0.city").unwrap(), "Bergen");
        assert_eq!(*person.read_path_as::<u32>("address.zip_code").unwrap(), 12345);
    }

    #[test]
    fn read_through_pointers() {
        let mut person = person();
        let mut spouse = person.clone();
        spouse.name = "Jane Doe".into();
        person.spouse = Some(Box::new(spouse));

        assert_eq!(person.read_path_as::<String>("spouse.name").unwrap(), "Jane Doe");
        assert_eq!(
            person.read_path_as::<String>("spouse.address.city").unwrap(),
            "Anytown"
        );

        // The terminal pointer itself is returned.
        assert!(person.read_path("spouse").unwrap().is::<Option<Box<Person>>>());
    }

    #[test]
    fn read_empty_pointer() {
        let person = person();

        let err = person.read_path("spouse.name").unwrap_err();
        assert_eq!(err, not_found("name", "Option<Box<Person>>"));

        let err = person.read_path("meta.a").unwrap_err();
        assert_eq!(err, not_found("a", "Dynamic"));
    }

    #[test]
    fn read_missing() {
        let person = person();

        assert_eq!(
            person.read_path("hobbies.2").unwrap_err(),
            not_found("2", "Vec<String>")
        );
        assert_eq!(
            person.read_path("address.country").unwrap_err(),
            not_found("country", "Address")
        );
        assert_eq!(
            person.read_path("name.len").unwrap_err(),
            not_found("len", "String")
        );
        assert_eq!(
            person.read_path("scores.art").unwrap_err(),
            not_found("art", "BTreeMap<String, f64>")
        );
        assert_eq!(
            person.read_path("address..city").unwrap_err(),
            not_found("", "Address")
        );

        for index in ["-1", "+1", " 1", "1 ", "0x1", "one"] {
            let path = alloc::format!("hobbies.{index}");
            assert!(person.read_path(&path).is_err(), "{path}");
        }
    }

    #[test]
    fn read_as_mismatch() {
        let person = person();

        let err = person.read_path_as::<i64>("age").unwrap_err();
        assert_eq!(err, mismatch("i64", "i32"));
        assert_eq!(err.to_string(), "expected i64, not i32");
    }

    #[test]
    fn read_mut_modifies_in_place() {
        let mut person = person();

        *person.read_path_mut_as::<u32>("address.zip_code").unwrap() = 1;
        person.read_path_mut_as::<Vec<String>>("hobbies").unwrap().clear();

        assert_eq!(person.address.zip, 1);
        assert!(person.hobbies.is_empty());

        // Reads never grow.
        assert!(person.read_path_mut("hobbies.0").is_err());
        assert!(person.hobbies.is_empty());
    }

    // -------------------------------------------------------------------------
    // Writes

    #[test]
    fn write_then_read() {
        let mut person = person();

        let changed = person
            .write_path("address.city", &String::from("Springfield"))
            .unwrap();
        assert!(changed);
        assert_eq!(
            person.read_path_as::<String>("address.city").unwrap(),
            "Springfield"
        );

        assert!(person.write_path("hobbies.0", &String::from("chess")).unwrap());
        assert_eq!(person.hobbies, ["chess", "hiking"]);
    }

    #[test]
    fn write_is_idempotent() {
        let mut person = person();

        assert!(person.write_path("age", &31_i32).unwrap());
        assert!(!person.write_path("age", &31_i32).unwrap());

        let address = Address {
            street: "1 Side St".into(),
            city: "Oslo".into(),
            zip: 150,
        };
        assert!(person.write_path("address", &address).unwrap());
        assert!(!person.write_path("address", &address).unwrap());
        assert_eq!(person.address, address);
    }

    #[test]
    fn write_root() {
        let mut age = 3_i32;
        assert!(access::write(&mut age, "", &4_i32).unwrap());
        assert_eq!(age, 4);

        let err = access::write(&mut age, "", &String::new()).unwrap_err();
        assert_eq!(err, mismatch("i32", "String"));
    }

    #[test]
    fn write_truncates_numbers() {
        let mut person = person();

        assert!(person.write_path("age", &1.9_f64).unwrap());
        assert_eq!(person.age, 1);

        assert!(!person.write_path("age", &1.2_f32).unwrap());
        assert!(person.write_path("age", &-7_i64).unwrap());
        assert_eq!(person.age, -7);

        assert!(person.write_path("address.zip_code", &-5.0_f64).unwrap());
        assert_eq!(person.address.zip, 0);

        let err = person.write_path("address.zip", &7_u32).unwrap_err();
        assert_eq!(err, not_found("zip", "Address"));
        assert_eq!(person.address.zip, 0);

        assert!(person.write_path("scores.math", &91.0_f64).unwrap());
        assert_eq!(person.scores["math"], 91.0);
    }

    #[test]
    fn write_type_mismatch() {
        let mut person = person();

        let err = person.write_path("name", &5_i32).unwrap_err();
        assert_eq!(err, mismatch("String", "i32"));

        let err = person.write_path("age", &String::from("5")).unwrap_err();
        assert_eq!(err.to_string(), "expected i32, not String");

        // Pointers are not looked through at the terminal.
        let err = person.write_path("nick", &String::from("Jo")).unwrap_err();
        assert_eq!(err, mismatch("Option<String>", "String"));

        assert_eq!(person, self::person());
    }

    #[test]
    fn write_pointer() {
        let mut person = person();

        assert!(person.write_path("nick", &Some(String::from("Jo"))).unwrap());
        assert_eq!(person.nickname.as_deref(), Some("Jo"));

        assert!(person.write_path("nick", &None::<String>).unwrap());
        assert_eq!(person.nickname, None);
    }

    // -------------------------------------------------------------------------
    // Growth

    #[test]
    fn write_grows_by_one() {
        let mut person = person();

        assert!(person.write_path("hobbies.2", &String::from("chess")).unwrap());
        assert_eq!(person.hobbies.len(), 3);
        assert_eq!(person.hobbies[2], "chess");

        let err = person
            .write_path("hobbies.4", &String::from("go"))
            .unwrap_err();
        assert_eq!(err, not_found("4", "Vec<String>"));
        assert_eq!(person.hobbies.len(), 3);
    }

    #[test]
    fn growth_then_equal_write_is_unchanged() {
        let mut person = person();

        // The grown element already equals the written value.
        assert!(!person.write_path("hobbies.2", &String::new()).unwrap());
        assert_eq!(person.hobbies.len(), 3);
        assert_eq!(person.hobbies[2], "");

        assert!(person.write_path("hobbies.3", &String::from("go")).unwrap());
        assert_eq!(person.hobbies.len(), 4);
    }

    #[test]
    fn growth_is_terminal_by_default() {
        let mut person = person();

        let err = person
            .write_path("friends.0.city", &String::from("Oslo"))
            .unwrap_err();
        assert_eq!(err, not_found("0", "Vec<Address>"));
        assert!(person.friends.is_empty());

        let options = AccessOptions::new().with_growth(Growth::AnySegment);
        let changed = options
            .write(&mut person, "friends.0.city", &String::from("Oslo"))
            .unwrap();
        assert!(changed);
        assert_eq!(person.friends.len(), 1);
        assert_eq!(person.friends[0].city, "Oslo");
    }

    #[test]
    fn growth_requires_default() {
        let mut tokens = vec![Token(1)];

        let err = access::write(&mut tokens, "1", &Token(2)).unwrap_err();
        assert_eq!(err, not_found("1", "Vec<Token>"));
        assert!(!access::write(&mut tokens, "0", &Token(1)).unwrap());
        assert!(access::write(&mut tokens, "0", &Token(3)).unwrap());
        assert_eq!(tokens, [Token(3)]);
    }

    #[test]
    fn arrays_never_grow() {
        let mut data = [1_u8, 2];

        assert!(access::write(&mut data, "2", &3_u8).is_err());
        assert!(access::write(&mut data, "1", &3_u8).unwrap());
        assert_eq!(data, [1, 3]);
    }

    // -------------------------------------------------------------------------
    // Field names

    #[test]
    fn alias_replaces_name() {
        let mut person = person();

        assert!(person.read_path("zip").is_err());
        assert!(person.read_path("address.zip").is_err());
        assert!(person.read_path("address.zip_code").is_ok());

        assert!(person.read_path("nick").is_ok());
        assert_eq!(
            person.read_path("nickname").unwrap_err(),
            not_found("nickname", "Person")
        );

        assert!(person.write_path("address.zip_code", &1_u32).unwrap());
        assert_eq!(person.address.zip, 1);
    }

    #[test]
    fn hidden_field() {
        let mut person = person();

        assert_eq!(
            person.read_path("secret").unwrap_err(),
            not_found("secret", "Person")
        );
        assert_eq!(
            person.read_path("-").unwrap_err(),
            not_found("-", "Person")
        );
        assert!(person.write_path("secret", &String::new()).is_err());

        let patch = json(r#"{ "secret": "exposed", "-": "exposed", "name": "Jo" }"#);
        assert!(person.write_path("", &patch).unwrap());
        assert_eq!(person.secret, "hunter2");
        assert_eq!(person.name, "Jo");
    }

    #[test]
    fn serde_names() {
        let mut account: Account =
            serde_json::from_str(r#"{ "userName": "root", "userId": 7 }"#).unwrap();

        assert_eq!(account.read_path_as::<String>("userName").unwrap(), "root");
        assert!(account.read_path("user_name").is_err());
        assert!(account.read_path("cache").is_err());

        // A reflect alias wins over a serde rename.
        assert_eq!(*account.read_path_as::<u64>("id").unwrap(), 7);
        assert!(account.read_path("userId").is_err());

        assert!(account.write_path("userName", &String::from("admin")).unwrap());
        assert_eq!(account.user_name, "admin");
        assert_eq!(account.cache, 0);
    }

    #[test]
    fn case_insensitive() {
        let mut person = person();
        let options = AccessOptions::new().with_field_case(FieldCase::Insensitive);

        assert!(person.read_path("ADDRESS.City").is_err());
        assert_eq!(
            options.read_as::<String>(&person, "ADDRESS.City").unwrap(),
            "Anytown"
        );
        assert_eq!(*options.read_as::<f64>(&person, "Scores.MATH").unwrap(), 90.5);
        assert!(options.read(&person, "Nick").is_ok());
        assert!(options.read(&person, "SECRET").is_err());

        assert!(options.write(&mut person, "Scores.Math", &1.0_f64).unwrap());
        assert_eq!(person.scores.len(), 1);
        assert_eq!(person.scores["math"], 1.0);

        let patch = json(r#"{ "CITY": "Oslo" }"#);
        assert!(options.write(&mut person, "address", &patch).unwrap());
        assert_eq!(person.address.city, "Oslo");
    }

    // -------------------------------------------------------------------------
    // Merge

    #[test]
    fn merge_map_into_struct() {
        let mut person = person();
        let patch = json(r#"{ "street": "1 Side St", "city": "Oslo", "zip_code": 150, "country": "NO" }"#);

        assert!(person.write_path("address", &patch).unwrap());
        assert_eq!(
            person.address,
            Address {
                street: "1 Side St".into(),
                city: "Oslo".into(),
                zip: 150,
            }
        );

        assert!(!person.write_path("address", &patch).unwrap());
    }

    #[test]
    fn merge_nested() {
        let mut person = person();
        let patch = json(
            r#"{
                "age": 40.7,
                "address": { "city": "Oslo" },
                "hobbies": ["ignored"],
                "nick": "Jo"
            }"#,
        );

        // `hobbies` holds `Vec<Dynamic>`, which is not a `Vec<String>`.
        let err = person.write_path("", &patch).unwrap_err();
        assert_eq!(err, mismatch("Vec<String>", "Vec<Dynamic>"));

        // Entries before the failing one stay merged.
        assert_eq!(person.address.city, "Oslo");
        assert_eq!(person.age, 40);
        assert_eq!(person.hobbies.len(), 2);
        assert_eq!(person.nickname, None);
    }

    #[test]
    fn merge_mismatch_keeps_earlier_fields() {
        let mut person = person();
        let patch = json(r#"{ "city": "Bergen", "zip_code": "abc" }"#);

        let err = person.write_path("address", &patch).unwrap_err();
        assert_eq!(err, mismatch("u32", "String"));
        assert_eq!(person.address.city, "Bergen");
        assert_eq!(person.address.zip, 12345);
    }

    #[test]
    fn merge_from_ron() {
        let mut person = person();
        let patch: Dynamic = ron::from_str(r#"{ "city": "Rome", "zip_code": 100 }"#).unwrap();

        assert!(person.write_path("address", &patch).unwrap());
        assert_eq!(person.address.city, "Rome");
        assert_eq!(person.address.zip, 100);
    }

    #[test]
    fn merge_typed_map() {
        let mut person = person();
        let mut patch = BTreeMap::new();
        patch.insert(String::from("city"), String::from("Paris"));
        patch.insert(String::from("street"), String::from("Rue"));

        assert!(person.write_path("address", &patch).unwrap());
        assert_eq!(person.address.city, "Paris");
        assert_eq!(person.address.street, "Rue");
    }

    // -------------------------------------------------------------------------
    // Maps

    #[test]
    fn map_entries() {
        let mut person = person();

        assert!(person.write_path("scores.math", &95.0_f64).unwrap());
        assert!(!person.write_path("scores.math", &95.0_f64).unwrap());
        assert_eq!(person.scores["math"], 95.0);

        // Entries take the value type only.
        let err = person.write_path("scores.math", &95_i32).unwrap_err();
        assert_eq!(err, mismatch("f64", "i32"));

        // Missing keys are not created.
        let err = person.write_path("scores.art", &1.0_f64).unwrap_err();
        assert_eq!(err, not_found("art", "BTreeMap<String, f64>"));
        assert_eq!(person.scores.len(), 1);
    }

    #[test]
    fn map_of_structs() {
        let mut places = BTreeMap::new();
        places.insert(String::from("home"), Address::default());

        assert!(access::write(&mut places, "home.city", &String::from("Oslo")).unwrap());
        assert_eq!(places["home"].city, "Oslo");

        let other = Address {
            city: "Rome".into(),
            ..Address::default()
        };
        assert!(access::write(&mut places, "home", &other).unwrap());
        assert_eq!(places["home"], other);
    }

    // -------------------------------------------------------------------------
    // Dynamic

    #[test]
    fn dynamic_field() {
        let mut person = person();

        assert!(person.write_path("meta", &String::from("note")).unwrap());
        assert_eq!(person.read_path_as::<String>("meta").unwrap(), "note");
        assert!(!person.write_path("meta", &String::from("note")).unwrap());

        // Any type is accepted.
        assert!(person.write_path("meta", &5_u8).unwrap());
        assert_eq!(person.meta.downcast_ref::<u8>(), Some(&5));

        // The slot itself is still reachable.
        assert!(person.read_path_as::<Dynamic>("meta").is_ok());
    }

    #[test]
    fn dynamic_tree() {
        let mut person = person();

        let tree = json(r#"{ "a": [1, -2, 2.5, "x", null, true] }"#);
        assert!(person.write_path("meta", &tree).unwrap());

        assert_eq!(*person.read_path_as::<u64>("meta.a.0").unwrap(), 1);
        assert_eq!(*person.read_path_as::<i64>("meta.a.1").unwrap(), -2);
        assert_eq!(*person.read_path_as::<f64>("meta.a.2").unwrap(), 2.5);
        assert_eq!(person.read_path_as::<String>("meta.a.3").unwrap(), "x");
        assert!(person.read_path_as::<Dynamic>("meta.a.4").unwrap().is_empty());
        assert!(*person.read_path_as::<bool>("meta.a.5").unwrap());

        assert!(person.write_path("meta.a.3", &Token(1)).unwrap());
        assert_eq!(*person.read_path_as::<Token>("meta.a.3").unwrap(), Token(1));

        assert!(person.write_path("meta.a.6", &'c').unwrap());
        assert_eq!(*person.read_path_as::<char>("meta.a.6").unwrap(), 'c');
    }

    #[test]
    fn dynamic_value_is_unwrapped() {
        let mut person = person();

        assert!(person.write_path("name", &Dynamic::new(String::from("Jo"))).unwrap());
        assert_eq!(person.name, "Jo");

        assert!(person.write_path("age", &Dynamic::new(7_u64)).unwrap());
        assert_eq!(person.age, 7);
    }

    // -------------------------------------------------------------------------
    // Receivers

    #[test]
    fn invalid_receiver() {
        let mut root: Option<Person> = None;

        let err = access::write(&mut root, "name", &String::from("Jo")).unwrap_err();
        assert_eq!(err, AccessError::InvalidReceiver);
        assert_eq!(err.to_string(), "invalid receiver");

        let mut root = Dynamic::empty();
        let err = access::write(&mut root, "0", &1_u8).unwrap_err();
        assert_eq!(err, AccessError::InvalidReceiver);

        // The root itself can be replaced.
        let mut root: Option<Person> = None;
        assert!(access::write(&mut root, "", &Some(person())).unwrap());
        assert!(access::write(&mut root, "name", &String::from("Jo")).unwrap());
        assert_eq!(root.unwrap().name, "Jo");
    }

    #[test]
    fn write_through_empty_inner_pointer() {
        let mut person = person();

        let err = person
            .write_path("spouse.name", &String::from("Jo"))
            .unwrap_err();
        assert_eq!(err, not_found("name", "Option<Box<Person>>"));
        assert!(person.spouse.is_none());
    }

    // -------------------------------------------------------------------------
    // PathAccessor

    #[test]
    fn path_accessor_reuse() {
        let city = PathAccessor::parse_static("address.city");
        assert_eq!(city.len(), 2);
        assert_eq!(city.to_string(), "address.city");

        let mut people = vec![person(), person()];
        people[1].address.city = "Oslo".into();

        let cities: Vec<&String> = people
            .iter()
            .map(|person| city.read_as::<String>(person).unwrap())
            .collect();
        assert_eq!(cities, ["Anytown", "Oslo"]);

        for person in &mut people {
            city.write(person, &String::from("Rome")).unwrap();
        }
        assert!(people.iter().all(|person| person.address.city == "Rome"));

        let path = String::from("friends.0");
        let friend = PathAccessor::parse(&path)
            .with_options(AccessOptions::new().with_growth(Growth::AnySegment));
        assert!(!friend.write(&mut people[0], &Address::default()).unwrap());
        assert_eq!(people[0].friends.len(), 1);
        assert_eq!(people[0].friends[0], Address::default());

        let root = PathAccessor::parse("");
        assert!(root.is_empty());
        assert_eq!(root.to_string(), "");
    }

    #[test]
    fn path_accessor_concat() {
        let options = AccessOptions::new().with_field_case(FieldCase::Insensitive);
        let accessor = PathAccessor::parse_static("Address")
            .with_options(options)
            .concat(PathAccessor::parse("ZIP_CODE"));

        assert_eq!(accessor.to_string(), "Address.ZIP_CODE");
        assert_eq!(accessor.options(), &options);
        assert_eq!(*accessor.read_as::<u32>(&person()).unwrap(), 12345);
    }
}
