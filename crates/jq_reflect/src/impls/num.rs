use alloc::boxed::Box;
use core::fmt;

use crate::ops::{Number, NumberValue};
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_number {
    ($($ty:ty => $variant:ident($repr:ty)),* $(,)?) => {$(
        impl Reflect for $ty {
            impl_reflect_cast_fn!(Number);

            #[inline]
            fn reflect_clone(&self) -> Box<dyn Reflect> {
                Box::new(*self)
            }

            #[inline]
            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl Number for $ty {
            #[inline]
            #[allow(clippy::unnecessary_cast, clippy::cast_lossless)]
            fn number(&self) -> NumberValue {
                NumberValue::$variant(*self as $repr)
            }

            #[allow(clippy::unnecessary_cast, clippy::float_cmp)]
            fn set_number(&mut self, value: NumberValue) -> bool {
                let converted = match value {
                    NumberValue::Signed(value) => value as $ty,
                    NumberValue::Unsigned(value) => value as $ty,
                    NumberValue::Float(value) => value as $ty,
                };
                if *self == converted {
                    return false;
                }
                *self = converted;
                true
            }
        }

        impl FromReflect for $ty {
            #[inline]
            fn default_value() -> Option<Self> {
                Some(<$ty>::default())
            }
        }
    )*};
}

impl_reflect_number!(
    i8 => Signed(i64),
    i16 => Signed(i64),
    i32 => Signed(i64),
    i64 => Signed(i64),
    isize => Signed(i64),
    u8 => Unsigned(u64),
    u16 => Unsigned(u64),
    u32 => Unsigned(u64),
    u64 => Unsigned(u64),
    usize => Unsigned(u64),
    f32 => Float(f64),
    f64 => Float(f64),
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::ops::{Number, NumberValue};
    use crate::{FromReflect, Reflect};

    #[test]
    fn float_to_int_truncates_and_saturates() {
        let mut x = 0_i32;
        assert!(x.set_number(NumberValue::Float(-1.9)));
        assert_eq!(x, -1);

        let mut y = 0_u8;
        assert!(y.set_number(NumberValue::Float(1e9)));
        assert_eq!(y, u8::MAX);
        assert!(y.set_number(NumberValue::Float(-3.0)));
        assert_eq!(y, 0);
    }

    #[test]
    fn int_narrowing_wraps() {
        let mut x = 0_u8;
        assert!(x.set_number(NumberValue::Signed(-1)));
        assert_eq!(x, 255);
        assert!(!x.set_number(NumberValue::Unsigned(511)));
    }

    #[test]
    fn nan_always_changes() {
        let mut x = f64::NAN;
        assert!(x.set_number(NumberValue::Float(f64::NAN)));
        assert!(x.is_nan());
    }

    #[test]
    fn same_type_equality_only() {
        assert_eq!(1_i32.reflect_partial_eq(&1_i32), Some(true));
        assert_eq!(1_i32.reflect_partial_eq(&1_i64), Some(false));
        assert_eq!(i16::default_value(), Some(0));
        assert_eq!(f32::default_value(), Some(0.0));
    }
}
