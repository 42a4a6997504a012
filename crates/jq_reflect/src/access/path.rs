use core::iter::FusedIterator;
use core::str::Split;

// -----------------------------------------------------------------------------
// Segments

/// An iterator over the segments of a dotted path.
///
/// Created by [`segments`].
#[derive(Debug, Clone)]
pub struct Segments<'a>(Option<Split<'a, char>>);

impl<'a> Iterator for Segments<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next()
    }
}

impl FusedIterator for Segments<'_> {}

/// Splits a path into its segments.
///
/// The empty path has no segments and addresses the root value. There is no
/// escaping: a segment never contains `.`. Empty segments, as in `"a..b"` or
/// `"a."`, are kept and simply never resolve.
///
/// # Examples
///
/// ```
/// use jq_reflect::access::segments;
///
/// assert_eq!(segments("address.city").collect::<Vec<_>>(), ["address", "city"]);
/// assert_eq!(segments("hobbies.0").collect::<Vec<_>>(), ["hobbies", "0"]);
/// assert_eq!(segments("").count(), 0);
/// assert_eq!(segments("a..b").collect::<Vec<_>>(), ["a", "", "b"]);
/// ```
#[inline]
pub fn segments(path: &str) -> Segments<'_> {
    if path.is_empty() {
        Segments(None)
    } else {
        Segments(Some(path.split('.')))
    }
}

/// Parses a list index segment: ASCII digits only, no sign or whitespace.
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{parse_index, segments};

    #[test]
    fn trailing_dot_keeps_empty_segment() {
        assert_eq!(segments("a.").collect::<Vec<_>>(), ["a", ""]);
        assert_eq!(segments(".").collect::<Vec<_>>(), ["", ""]);
    }

    #[test]
    fn index_segments() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index(" 1"), None);
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("1x"), None);
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }
}
