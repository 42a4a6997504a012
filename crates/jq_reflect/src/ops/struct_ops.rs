use crate::Reflect;
use crate::info::{FieldCase, NamedField};

// -----------------------------------------------------------------------------
// Struct

/// A trait used to power [struct-like] operations via [reflection].
///
/// This trait uses the [`Reflect`] trait to allow implementors to have their
/// fields be dynamically addressed by name and by declaration index.
///
/// # Example
///
/// ```
/// use jq_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect, Clone)]
/// struct Foo {
///     bar: u32,
///     #[reflect(alias = "Baz")]
///     baz: String,
/// }
///
/// let foo = Foo { bar: 123, baz: "text".into() };
///
/// assert_eq!(foo.field_len(), 2);
/// assert_eq!(foo.field_infos()[1].path_name(), Some("Baz"));
///
/// let field = foo.field("bar").unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&123));
/// ```
///
/// [struct-like]: https://doc.rust-lang.org/book/ch05-01-defining-structs.html
/// [reflection]: crate
pub trait Struct: Reflect {
    /// Returns the metadata of every field, in declaration order.
    fn field_infos(&self) -> &'static [NamedField];

    /// Returns a reference to the value of the field with index `index` as a
    /// `&dyn Reflect`.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the value of the field with index `index`
    /// as a `&mut dyn Reflect`.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of fields in the struct.
    #[inline]
    fn field_len(&self) -> usize {
        self.field_infos().len()
    }

    /// Returns a reference to the field with the declared name `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let index = self.field_infos().iter().position(|f| f.name() == name)?;
        self.field_at(index)
    }

    /// Returns a mutable reference to the field with the declared name `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.field_infos().iter().position(|f| f.name() == name)?;
        self.field_at_mut(index)
    }
}

impl dyn Struct {
    /// Returns the index of the first field addressed by a path `segment`.
    ///
    /// Aliases replace declared names and hidden fields never match,
    /// see [`NamedField::path_name`].
    ///
    /// # Example
    ///
    /// ```
    /// use jq_reflect::{derive::Reflect, info::FieldCase, ops::Struct};
    ///
    /// #[derive(Reflect, Clone)]
    /// struct Foo {
    ///     #[reflect(alias = "sX")]
    ///     s_x: i32,
    /// }
    ///
    /// let foo: &dyn Struct = &Foo { s_x: 1 };
    /// assert_eq!(foo.index_of("sX", FieldCase::Sensitive), Some(0));
    /// assert_eq!(foo.index_of("s_x", FieldCase::Sensitive), None);
    /// assert_eq!(foo.index_of("SX", FieldCase::Insensitive), Some(0));
    /// ```
    pub fn index_of(&self, segment: &str, case: FieldCase) -> Option<usize> {
        self.field_infos()
            .iter()
            .position(|info| info.matches(segment, case))
    }

    /// Returns an iterator over the fields and their metadata.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter {
            index: 0,
            infos: self.field_infos(),
            fields: self,
        }
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the fields of a [`Struct`], with their [`NamedField`].
pub struct StructFieldIter<'a> {
    index: usize,
    infos: &'static [NamedField],
    fields: &'a dyn Struct,
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = (&'static NamedField, &'a dyn Reflect);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let info = self.infos.get(self.index)?;
        let value = self.fields.field_at(self.index)?;
        self.index += 1;
        Some((info, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.infos.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
