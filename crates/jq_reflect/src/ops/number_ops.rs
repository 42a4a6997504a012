use core::fmt;

use crate::Reflect;

// -----------------------------------------------------------------------------
// NumberValue

/// The widest representation of a numeric value of a [`Number`].
///
/// # Example
///
/// ```
/// use jq_reflect::ops::{Number, NumberValue};
///
/// assert_eq!(7_u16.number(), NumberValue::Unsigned(7));
/// assert_eq!((-7_i8).number(), NumberValue::Signed(-7));
/// assert_eq!(0.5_f32.number(), NumberValue::Float(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// Any signed integer.
    Signed(i64),
    /// Any unsigned integer.
    Unsigned(u64),
    /// Any float.
    Float(f64),
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(value) => fmt::Display::fmt(value, f),
            Self::Unsigned(value) => fmt::Display::fmt(value, f),
            Self::Float(value) => fmt::Display::fmt(value, f),
        }
    }
}

// -----------------------------------------------------------------------------
// Number

/// A trait used to power numeric conversion via [reflection].
///
/// Implemented for every primitive integer and float type except
/// `i128` and `u128`.
///
/// # Example
///
/// ```
/// use jq_reflect::ops::{Number, NumberValue};
///
/// let mut x = 0_i32;
///
/// assert!(x.set_number(NumberValue::Float(1.9)));
/// assert_eq!(x, 1);
///
/// // Same value, nothing changes.
/// assert!(!x.set_number(NumberValue::Unsigned(1)));
/// ```
///
/// [reflection]: crate
pub trait Number: Reflect {
    /// Returns the current value.
    fn number(&self) -> NumberValue;

    /// Converts `value` to `Self` with `as` semantics and stores it.
    ///
    /// Floats truncate toward zero and saturate when converted to integers,
    /// integers wrap when narrowed.
    ///
    /// Returns `true` if the stored value changed.
    fn set_number(&mut self, value: NumberValue) -> bool;
}
