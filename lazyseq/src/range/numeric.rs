use crate::error;
use crate::sequence::{materialize, BoxedIter, Comparator, Cursor, Seq, Sequence};

use super::number::RangeNumber;

/// The numbers from `start` (inclusive) towards `stop` (exclusive) in
/// increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumericRange<T> {
    start: T,
    stop: T,
    step: T,
    len: usize,
}

impl<T: RangeNumber> NumericRange<T> {
    /// A range with an explicit step.
    ///
    /// The step must not be zero and must point from `start` towards `stop`.
    pub fn new(start: T, stop: T, step: T) -> error::Result<Self> {
        error::require(step.is_valid_step(), "step must not be zero")?;
        if step < T::zero() {
            error::require(
                start >= stop,
                "start must be greater than or equal to stop if step is negative",
            )?;
        } else {
            error::require(
                start <= stop,
                "start must be less than or equal to stop if step is positive",
            )?;
        }
        Ok(Self {
            start,
            stop,
            step,
            len: T::steps_between(start, stop, step),
        })
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn stop(&self) -> T {
        self.stop
    }

    pub fn step(&self) -> T {
        self.step
    }

    /// Whether `value` is one of the elements.
    pub fn contains(&self, value: T) -> bool {
        let within = if self.step > T::zero() {
            self.start <= value && value < self.stop
        } else {
            self.start >= value && value > self.stop
        };
        within && value.is_aligned(self.start, self.step)
    }

    pub fn cursor(&self) -> RangeIter<T> {
        RangeIter {
            start: self.start,
            step: self.step,
            index: 0,
            len: self.len,
        }
    }

    /// The same elements walked from the last one back to `start`.
    ///
    /// `None` when the bounds of the reversed range do not fit in `T`.
    pub fn reversed(&self) -> Option<Self> {
        if self.len == 0 {
            return Some(*self);
        }
        let step = self.step.checked_negate()?;
        Some(Self {
            start: self.start.checked_offset(self.step, self.len - 1)?,
            stop: self.start.checked_offset(step, 1)?,
            step,
            len: self.len,
        })
    }

    fn sub_range(&self, start: usize, end: usize) -> Option<Self> {
        Some(Self {
            start: self.start.checked_offset(self.step, start)?,
            stop: self.start.checked_offset(self.step, end)?,
            step: self.step,
            len: end - start,
        })
    }
}

impl<T: RangeNumber> Sequence<T> for NumericRange<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> BoxedIter<'_, T> {
        Box::new(self.cursor())
    }

    fn duplicate(&self) -> Seq<T> {
        Seq::new(*self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, T> {
        Box::new(self.cursor())
    }

    fn slice(self: Box<Self>, start: usize, end: usize) -> Seq<T> {
        let end = end.min(self.len);
        let start = start.min(end);
        match self.sub_range(start, end) {
            Some(range) => Seq::new(range),
            None => materialize::slice(self.iter(), start, end),
        }
    }

    fn sort_natural(self: Box<Self>, _compare: Comparator<'_, T>) -> Seq<T> {
        if self.step > T::zero() {
            Seq::from_box(self)
        } else {
            self.reverse()
        }
    }

    fn reverse(self: Box<Self>) -> Seq<T> {
        match self.reversed() {
            Some(range) => Seq::new(range),
            None => materialize::reverse(self.iter()),
        }
    }
}

impl<T: RangeNumber> From<NumericRange<T>> for Seq<T> {
    fn from(range: NumericRange<T>) -> Self {
        Seq::new(range)
    }
}

/// Computes every element from the start of the range, so floating point
/// error does not accumulate.
#[derive(Debug, Clone)]
pub struct RangeIter<T> {
    start: T,
    step: T,
    index: usize,
    len: usize,
}

impl<T: RangeNumber> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index >= self.len {
            return None;
        }
        let value = self.start.checked_offset(self.step, self.index);
        self.index += 1;
        if value.is_none() {
            // overflow of the element type ends the range
            self.index = self.len;
        }
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<T: RangeNumber> Cursor for RangeIter<T> {}
