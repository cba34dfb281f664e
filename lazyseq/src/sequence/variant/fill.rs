use std::num::NonZeroUsize;

use rand::RngCore;

use crate::error;
use crate::sequence::cursor::Cursor;
use crate::sequence::traits::{BoxedIter, Comparator, Element, Sequence};
use crate::sequence::Seq;

/// One value repeated `count` times, without storing the copies.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill<T> {
    value: T,
    count: usize,
}

impl<T: Element> Fill<T> {
    pub fn new(value: T, count: usize) -> error::Result<Self> {
        error::require(count > 0, "size must be positive")?;
        Ok(Self { value, count })
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn cursor(&self) -> FillIter<T> {
        FillIter {
            value: self.value.clone(),
            remaining: self.count,
        }
    }
}

pub struct FillIter<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone> Iterator for FillIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.value.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> Cursor for FillIter<T> {}

impl<T: Element> Sequence<T> for Fill<T> {
    #[inline]
    fn len(&self) -> usize {
        self.count
    }

    fn iter(&self) -> BoxedIter<'_, T> {
        Box::new(self.cursor())
    }

    fn duplicate(&self) -> Seq<T> {
        Seq::new(self.clone())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, T> {
        Box::new(self.cursor())
    }

    fn repeat(mut self: Box<Self>, times: NonZeroUsize) -> Seq<T> {
        self.count = self.count.saturating_mul(times.get());
        Seq::from_box(self)
    }

    fn slice(mut self: Box<Self>, start: usize, end: usize) -> Seq<T> {
        let end = end.min(self.count);
        let start = start.min(end);
        if start == end {
            return Seq::default();
        }
        self.count = end - start;
        Seq::from_box(self)
    }

    // every element is equal, so the order never changes

    fn shuffle(self: Box<Self>, _rng: &mut dyn RngCore) -> Seq<T> {
        Seq::from_box(self)
    }

    fn sort_by(self: Box<Self>, _compare: Comparator<'_, T>) -> Seq<T> {
        Seq::from_box(self)
    }

    fn reverse(self: Box<Self>) -> Seq<T> {
        Seq::from_box(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Fill::new("x", 0),
            Err(error::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cursor_is_exhausted() {
        let fill = Fill::new(7, 2).unwrap();
        let mut cursor = fill.cursor();
        assert_eq!(cursor.advance(), Ok(7));
        assert_eq!(cursor.advance(), Ok(7));
        assert_eq!(cursor.advance(), Err(error::Error::Exhausted));
        assert_eq!(cursor.remove(), Err(error::Error::Unsupported("remove")));
    }

    #[test]
    fn test_repeat_multiplies_count() {
        let seq = Seq::new(Fill::new('z', 3).unwrap()).repeat(4).unwrap();
        assert_eq!(seq.len(), 12);
        assert!(seq.iter().all(|c| c == 'z'));
    }

    #[test]
    fn test_slice() {
        let seq = Seq::new(Fill::new(1, 10).unwrap());
        assert_eq!(seq.slice(2, 5).len(), 3);
        let seq = Seq::new(Fill::new(1, 10).unwrap());
        assert_eq!(seq.slice(8, 50).len(), 2);
        let seq = Seq::new(Fill::new(1, 10).unwrap());
        assert!(seq.slice(4, 4).is_empty());
    }
}
