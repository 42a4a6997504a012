use crate::Reflect;

// -----------------------------------------------------------------------------
// Array

/// A trait used to power [array-like] operations via [reflection].
///
/// Arrays have a fixed length, so path writes never grow them.
///
/// # Example
///
/// ```
/// use jq_reflect::{Reflect, ops::Array};
///
/// let foo: &dyn Array = &[1_u32, 2, 3];
/// assert_eq!(foo.len(), 3);
///
/// let field: &dyn Reflect = foo.get(0).unwrap();
/// assert_eq!(field.downcast_ref::<u32>(), Some(&1));
/// ```
///
/// [array-like]: https://doc.rust-lang.org/book/ch03-02-data-types.html#the-array-type
/// [reflection]: crate
pub trait Array: Reflect {
    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements in the array.
    fn len(&self) -> usize;

    /// Returns `true` if the array has length zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn Array {
    /// Returns an iterator over the array.
    #[inline]
    pub fn iter(&self) -> ArrayItemIter<'_> {
        ArrayItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ArrayItemIter

/// An iterator over an [`Array`].
pub struct ArrayItemIter<'a> {
    array: &'a dyn Array,
    index: usize,
}

impl ArrayItemIter<'_> {
    /// Creates a new iterator for the given array.
    #[inline(always)]
    pub const fn new(array: &dyn Array) -> ArrayItemIter<'_> {
        ArrayItemIter { array, index: 0 }
    }
}

impl<'a> Iterator for ArrayItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.array.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.array.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ArrayItemIter<'_> {}
