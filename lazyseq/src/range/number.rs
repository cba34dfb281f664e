use std::fmt;

use num_traits::{FromPrimitive, Signed, ToPrimitive};
use rust_decimal::Decimal;

use crate::sequence::Element;

/// The arithmetic a numeric range needs from its element type.
pub trait RangeNumber:
    Element + Copy + PartialOrd + fmt::Debug + fmt::Display + Signed + ToPrimitive + FromPrimitive
{
    /// Whether the value can step a range forward or backward.
    fn is_valid_step(self) -> bool {
        !self.is_zero()
    }

    /// `floor(self / other)`.
    fn floor_div(self, other: Self) -> Self;

    /// `self + step * count`, or `None` when it does not fit.
    fn checked_offset(self, step: Self, count: usize) -> Option<Self>;

    fn checked_negate(self) -> Option<Self>;

    /// Whether `self - start` is a whole multiple of `step`.
    fn is_aligned(self, start: Self, step: Self) -> bool {
        let offset = self - start;
        (offset - offset.floor_div(step) * step).is_zero()
    }

    /// The number of steps from `start` needed to reach or pass `stop`.
    fn steps_between(start: Self, stop: Self, step: Self) -> usize {
        let distance = (start - stop).abs();
        let step = step.abs();
        let whole = distance.floor_div(step);
        let steps = whole.to_usize().unwrap_or(usize::MAX);
        if whole * step < distance {
            steps.saturating_add(1)
        } else {
            steps
        }
    }
}

macro_rules! integer_range_number {
    ($($ty:ty),*) => {
        $(
            impl RangeNumber for $ty {
                fn floor_div(self, other: Self) -> Self {
                    num::Integer::div_floor(&self, &other)
                }

                fn checked_offset(self, step: Self, count: usize) -> Option<Self> {
                    let count = i128::try_from(count).ok()?;
                    let value = i128::from(step)
                        .checked_mul(count)?
                        .checked_add(i128::from(self))?;
                    <$ty>::try_from(value).ok()
                }

                fn checked_negate(self) -> Option<Self> {
                    <$ty>::checked_neg(self)
                }

                fn is_aligned(self, start: Self, step: Self) -> bool {
                    self.abs_diff(start) % step.unsigned_abs() == 0
                }

                fn steps_between(start: Self, stop: Self, step: Self) -> usize {
                    let steps = start.abs_diff(stop).div_ceil(step.unsigned_abs());
                    usize::try_from(steps).unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

macro_rules! float_range_number {
    ($($ty:ty),*) => {
        $(
            impl RangeNumber for $ty {
                fn is_valid_step(self) -> bool {
                    self != 0.0 && self.is_finite()
                }

                fn floor_div(self, other: Self) -> Self {
                    (self / other).floor()
                }

                fn checked_offset(self, step: Self, count: usize) -> Option<Self> {
                    let value = self + step * count as $ty;
                    value.is_finite().then_some(value)
                }

                fn checked_negate(self) -> Option<Self> {
                    Some(-self)
                }
            }
        )*
    };
}

integer_range_number!(i8, i16, i32, i64, i128);
float_range_number!(f32, f64);

impl RangeNumber for Decimal {
    fn floor_div(self, other: Self) -> Self {
        match self.checked_div(other) {
            Some(quotient) => quotient.floor(),
            None => Decimal::MAX,
        }
    }

    // `Decimal` subtraction panics on overflow, so both of these stay checked

    fn is_aligned(self, start: Self, step: Self) -> bool {
        let (Some(value), Some(start)) = (self.checked_rem(step), start.checked_rem(step)) else {
            return false;
        };
        value
            .checked_sub(start)
            .and_then(|offset| offset.checked_rem(step))
            .is_some_and(|rest| rest.is_zero())
    }

    fn steps_between(start: Self, stop: Self, step: Self) -> usize {
        let Some(distance) = start.checked_sub(stop).map(|distance| distance.abs()) else {
            return usize::MAX;
        };
        let step = step.abs();
        let whole = distance.floor_div(step);
        let steps = whole.to_usize().unwrap_or(usize::MAX);
        match whole.checked_mul(step) {
            Some(covered) if covered < distance => steps.saturating_add(1),
            _ => steps,
        }
    }

    fn checked_offset(self, step: Self, count: usize) -> Option<Self> {
        step.checked_mul(Decimal::from(count))?.checked_add(self)
    }

    fn checked_negate(self) -> Option<Self> {
        Some(-self)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_steps_between_rounds_up() {
        assert_eq!(i32::steps_between(0, 10, 3), 4);
        assert_eq!(i32::steps_between(0, 9, 3), 3);
        assert_eq!(i32::steps_between(10, 0, -3), 4);
        assert_eq!(i8::steps_between(i8::MIN, i8::MAX, 1), 255);
        assert_eq!(f64::steps_between(0.0, 1.0, 0.25), 4);
        assert_eq!(Decimal::steps_between(dec!(0), dec!(1), dec!(0.3)), 4);
    }

    #[test]
    fn test_is_aligned() {
        assert!(9i64.is_aligned(0, 3));
        assert!(!10i64.is_aligned(0, 3));
        assert!((-6i32).is_aligned(3, -3));
        assert!(0.75f64.is_aligned(0.0, 0.25));
        assert!(dec!(1.5).is_aligned(dec!(0.5), dec!(0.5)));
        assert!(!dec!(1.2).is_aligned(dec!(0.5), dec!(0.5)));
    }

    #[test]
    fn test_checked_offset() {
        assert_eq!(10i32.checked_offset(-3, 4), Some(-2));
        assert_eq!(0i8.checked_offset(100, 2), None);
        assert_eq!(i8::MIN.checked_offset(1, 254), Some(126));
        assert_eq!(dec!(1.5).checked_offset(dec!(0.5), 3), Some(dec!(3.0)));
    }

    #[test]
    fn test_decimal_extremes() {
        assert_eq!(Decimal::steps_between(Decimal::MIN, Decimal::MAX, dec!(1)), usize::MAX);
        assert_eq!(Decimal::steps_between(Decimal::MAX, dec!(-1), dec!(-1)), usize::MAX);
        assert_eq!(Decimal::steps_between(Decimal::MAX, Decimal::MAX, dec!(1)), 0);
        assert!(Decimal::MAX.is_aligned(Decimal::MIN, dec!(1)));
        assert!(!dec!(0.5).is_aligned(Decimal::MIN, dec!(1)));
        assert!(Decimal::ZERO.is_aligned(Decimal::MAX, Decimal::MAX));
    }

    #[test]
    fn test_invalid_steps() {
        assert!(!0i16.is_valid_step());
        assert!(!f32::NAN.is_valid_step());
        assert!(!f64::INFINITY.is_valid_step());
        assert!(!Decimal::ZERO.is_valid_step());
        assert!((-1i128).is_valid_step());
    }
}
