// -----------------------------------------------------------------------------
// FieldCase

/// How path segments are compared against struct field names and map keys.
///
/// # Examples
///
/// ```
/// use jq_reflect::info::FieldCase;
///
/// assert!(FieldCase::Sensitive.matches("Name", "Name"));
/// assert!(!FieldCase::Sensitive.matches("Name", "name"));
/// assert!(FieldCase::Insensitive.matches("Name", "nAME"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCase {
    /// Byte-for-byte equality.
    #[default]
    Sensitive,
    /// ASCII case-insensitive equality.
    Insensitive,
}

impl FieldCase {
    /// Returns `true` if `segment` addresses `name` under this mode.
    #[inline]
    pub fn matches(self, name: &str, segment: &str) -> bool {
        match self {
            Self::Sensitive => name == segment,
            Self::Insensitive => name.eq_ignore_ascii_case(segment),
        }
    }
}

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named (struct) field.
///
/// A field is addressed by its *path name*: the alias when one is set and
/// not empty, the declared name otherwise. The alias `"-"` hides the field
/// from path access and serialization.
///
/// # Examples
///
/// ```
/// use jq_reflect::info::{FieldCase, NamedField};
///
/// let plain = NamedField::new("name");
/// let renamed = NamedField::new("s_x").with_alias("sX");
/// let hidden = NamedField::new("secret").with_alias("-");
///
/// assert_eq!(plain.path_name(), Some("name"));
/// assert_eq!(renamed.path_name(), Some("sX"));
/// assert_eq!(hidden.path_name(), None);
///
/// assert!(renamed.matches("sX", FieldCase::Sensitive));
/// assert!(!renamed.matches("s_x", FieldCase::Sensitive));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedField {
    name: &'static str,
    alias: Option<&'static str>,
}

impl NamedField {
    /// The alias that hides a field.
    pub const HIDDEN: &'static str = "-";

    /// Creates a new [`NamedField`] without alias.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self { name, alias: None }
    }

    /// Sets the alias annotation of this field.
    #[inline]
    pub const fn with_alias(self, alias: &'static str) -> Self {
        Self {
            alias: Some(alias),
            ..self
        }
    }

    /// Returns the declared field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the raw alias annotation, if any.
    #[inline]
    pub const fn alias(&self) -> Option<&'static str> {
        self.alias
    }

    /// Returns `true` if the field cannot be addressed by any path.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.alias == Some(Self::HIDDEN)
    }

    /// Returns the name a path segment must match, `None` for hidden fields.
    pub fn path_name(&self) -> Option<&'static str> {
        match self.alias {
            Some(Self::HIDDEN) => None,
            Some(alias) if !alias.is_empty() => Some(alias),
            _ => Some(self.name),
        }
    }

    /// Returns `true` if `segment` addresses this field.
    #[inline]
    pub fn matches(&self, segment: &str, case: FieldCase) -> bool {
        self.path_name()
            .is_some_and(|name| case.matches(name, segment))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{FieldCase, NamedField};

    #[test]
    fn empty_alias_falls_back_to_name() {
        let field = NamedField::new("value").with_alias("");
        assert_eq!(field.path_name(), Some("value"));
        assert!(field.matches("value", FieldCase::Sensitive));
        assert!(!field.is_hidden());
    }

    #[test]
    fn hidden_field_never_matches() {
        let field = NamedField::new("secret").with_alias(NamedField::HIDDEN);
        assert!(field.is_hidden());
        assert!(!field.matches("secret", FieldCase::Insensitive));
        assert!(!field.matches("-", FieldCase::Sensitive));
    }

    #[test]
    fn insensitive_uses_alias() {
        let field = NamedField::new("s_x").with_alias("sX");
        assert!(field.matches("SX", FieldCase::Insensitive));
        assert!(!field.matches("S_X", FieldCase::Insensitive));
    }
}
