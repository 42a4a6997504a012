use alloc::boxed::Box;

use crate::Reflect;

// -----------------------------------------------------------------------------
// List

/// A trait used to power [list-like] operations via [reflection].
///
/// This corresponds to types, like [`Vec`] and [`VecDeque`], which contain
/// an ordered sequence of elements that can grow at the end.
///
/// # Example
///
/// ```
/// use jq_reflect::{Reflect, ops::List};
///
/// let mut vec: Vec<u32> = vec![123];
/// let list: &mut dyn List = &mut vec;
///
/// assert!(list.push_default());
/// list.push(Box::new(7_u32)).unwrap();
/// assert!(list.push(Box::new(String::from("text"))).is_err());
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(vec, [123, 0, 7]);
/// ```
///
/// [list-like]: https://doc.rust-lang.org/book/ch08-01-vectors.html
/// [reflection]: crate
/// [`Vec`]: alloc::vec::Vec
/// [`VecDeque`]: alloc::collections::VecDeque
pub trait List: Reflect {
    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns a mutable reference to the element at the given index, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the number of elements in the list.
    fn len(&self) -> usize;

    /// Returns `true` if the list contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an element to the end of the list.
    ///
    /// The value is converted with [`FromReflect::take_from_reflect`] and
    /// handed back on failure.
    ///
    /// [`FromReflect::take_from_reflect`]: crate::FromReflect::take_from_reflect
    fn push(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Appends the element type's [default value] to the end of the list.
    ///
    /// Returns `false`, leaving the list untouched, if the element type has
    /// no default value.
    ///
    /// [default value]: crate::FromReflect::default_value
    fn push_default(&mut self) -> bool;
}

impl dyn List {
    /// Returns an iterator over the list.
    #[inline]
    pub fn iter(&self) -> ListItemIter<'_> {
        ListItemIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// ListItemIter

/// An iterator over an [`List`].
pub struct ListItemIter<'a> {
    list: &'a dyn List,
    index: usize,
}

impl ListItemIter<'_> {
    /// Creates a new iterator for the given list.
    #[inline(always)]
    pub const fn new(list: &dyn List) -> ListItemIter<'_> {
        ListItemIter { list, index: 0 }
    }
}

impl<'a> Iterator for ListItemIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.list.get(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.list.len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for ListItemIter<'_> {}
