//! Numeric, character and date ranges.
//!
//! Ranges compute their elements instead of storing them, so their length,
//! membership test, reversal and natural sort are all arithmetic.

mod character;
mod date;
mod number;
mod numeric;

pub use character::{CharRange, CharRangeIter};
pub use date::{DateField, DateRange, DateRangeBuilder, DateRangeIter};
pub use number::RangeNumber;
pub use numeric::{NumericRange, RangeIter};

use crate::error;

/// The numbers from zero towards `stop`, one at a time.
///
/// A negative `stop` counts down: `upto(-3)` yields 0, -1 and -2.
pub fn upto<T: RangeNumber>(stop: T) -> error::Result<NumericRange<T>> {
    let step = if stop < T::zero() { -T::one() } else { T::one() };
    NumericRange::new(T::zero(), stop, step)
}

/// The numbers from `start` towards `stop` with a step of one.
///
/// When `start` is after `stop` the range walks down from `start - 1` to
/// `stop`, so it holds the same numbers as `range(stop, start)` in reverse.
pub fn range<T: RangeNumber>(start: T, stop: T) -> error::Result<NumericRange<T>> {
    if start > stop {
        let down = -T::one();
        match (start.checked_offset(down, 1), stop.checked_offset(down, 1)) {
            (Some(first), Some(past)) => NumericRange::new(first, past, down),
            _ => Err(error::Error::InvalidArgument(format!(
                "cannot count down to {stop}"
            ))),
        }
    } else {
        NumericRange::new(start, stop, T::one())
    }
}

pub fn range_with_step<T: RangeNumber>(start: T, stop: T, step: T) -> error::Result<NumericRange<T>> {
    NumericRange::new(start, stop, step)
}

/// The characters from `from` to `to`, both included.
pub fn chars(from: char, to: char) -> CharRange {
    CharRange::new(from, to)
}

/// Dates after `begin` up to `end`; see [`DateRange::builder`].
pub fn dates(begin: chrono::NaiveDateTime, end: chrono::NaiveDateTime) -> DateRangeBuilder {
    DateRange::builder(begin, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{Seq, Sequence};

    #[test]
    fn test_upto() {
        let range = upto(10).unwrap();
        assert_eq!(range.len(), 10);
        assert!(range.contains(5));
        assert!(!range.contains(10));
        assert_eq!(Seq::from(upto(-3).unwrap()).to_vec(), vec![0, -1, -2]);
        assert!(upto(-3).unwrap().contains(0));
        assert!(!upto(-3).unwrap().contains(-3));
        assert!(Seq::from(upto(0).unwrap()).is_empty());
    }

    #[test]
    fn test_range_down() {
        assert_eq!(Seq::from(range(5, 0).unwrap()).to_vec(), vec![4, 3, 2, 1, 0]);
        assert_eq!(
            Seq::from(range(5, 0).unwrap()).sort().to_vec(),
            Seq::from(range(0, 5).unwrap()).to_vec()
        );
    }

    #[test]
    fn test_range_down_overflow_rejected() {
        assert!(range(0i8, i8::MIN).is_err());
        assert_eq!(upto(i8::MIN).unwrap().len(), 128);
    }

    #[test]
    fn test_decimal_range_down_from_max() {
        use rust_decimal::Decimal;
        use rust_decimal_macros::dec;

        let range = range(Decimal::MAX, dec!(-1)).unwrap();
        assert_eq!(range.len(), usize::MAX);
        assert_eq!(range.start(), Decimal::MAX - dec!(1));
    }

    #[test]
    fn test_upto_reverse() {
        assert_eq!(
            Seq::from(upto(5).unwrap()).reverse().to_vec(),
            vec![4, 3, 2, 1, 0]
        );
    }

    #[test]
    fn test_range_with_step() {
        assert_eq!(
            Seq::from(range_with_step(0, 10, 3).unwrap()).to_vec(),
            vec![0, 3, 6, 9]
        );
        assert!(range_with_step(0, 10, 0).is_err());
    }
}
