use alloc::string::String;

/// Strips module paths from every path segment of a type name.
///
/// [`core::any::type_name`] output is kept structurally intact, only the
/// leading `module::` parts of each path are removed.
///
/// # Examples
///
/// ```
/// use jq_reflect::info::short_type_name;
///
/// assert_eq!(short_type_name("alloc::string::String"), "String");
/// assert_eq!(
///     short_type_name("alloc::vec::Vec<core::option::Option<i32>>"),
///     "Vec<Option<i32>>",
/// );
/// assert_eq!(short_type_name("[my_app::Point; 3]"), "[Point; 3]");
/// ```
pub fn short_type_name(type_path: &str) -> String {
    let mut out = String::with_capacity(type_path.len());
    // Start of the path segment being written to `out`.
    let mut segment_start = 0;
    let mut chars = type_path.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            segment_start = out.len();
        }
    }

    out
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::short_type_name;

    #[test]
    fn nested_generics() {
        assert_eq!(
            short_type_name(
                "std::collections::hash::map::HashMap<alloc::string::String, jq_reflect::ops::Dynamic>"
            ),
            "HashMap<String, Dynamic>",
        );
    }

    #[test]
    fn primitives_and_references() {
        assert_eq!(short_type_name("i32"), "i32");
        assert_eq!(short_type_name("&str"), "&str");
        assert_eq!(short_type_name("dyn jq_reflect::Reflect"), "dyn Reflect");
        assert_eq!(short_type_name("()"), "()");
    }
}
