use crate::info::FieldCase;

// -----------------------------------------------------------------------------
// Growth

/// Which segments of a write path may grow a list.
///
/// A list grows by exactly one element, when the segment's index equals the
/// list's length. Reads never grow anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Growth {
    /// Only the last segment of a write path may grow a list.
    #[default]
    Terminal,
    /// Every segment of a write path may grow a list.
    AnySegment,
}

// -----------------------------------------------------------------------------
// AccessOptions

/// Configuration of path resolution.
///
/// # Examples
///
/// ```
/// use jq_reflect::access::{AccessOptions, Growth};
/// use jq_reflect::info::FieldCase;
///
/// const LENIENT: AccessOptions = AccessOptions::new()
///     .with_field_case(FieldCase::Insensitive)
///     .with_growth(Growth::AnySegment);
///
/// assert_eq!(AccessOptions::default().growth, Growth::Terminal);
/// assert_eq!(LENIENT.field_case, FieldCase::Insensitive);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessOptions {
    /// How segments are compared with field names and map keys.
    pub field_case: FieldCase,
    /// Which write segments may grow a list.
    pub growth: Growth,
}

impl AccessOptions {
    /// Case-sensitive names, terminal-only growth.
    pub const DEFAULT: Self = Self {
        field_case: FieldCase::Sensitive,
        growth: Growth::Terminal,
    };

    /// Creates the default options, same as [`AccessOptions::DEFAULT`].
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets [`AccessOptions::field_case`].
    #[inline]
    pub const fn with_field_case(mut self, field_case: FieldCase) -> Self {
        self.field_case = field_case;
        self
    }

    /// Sets [`AccessOptions::growth`].
    #[inline]
    pub const fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Returns `true` if a write segment may grow a list.
    #[inline]
    pub(crate) const fn may_grow(&self, terminal: bool) -> bool {
        terminal || matches!(self.growth, Growth::AnySegment)
    }
}
