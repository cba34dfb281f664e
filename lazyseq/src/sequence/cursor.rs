use crate::error;

use super::traits::BoxedIter;

/// Cursor operations on top of [`Iterator`].
///
/// `advance` turns running off the end into [`error::Error::Exhausted`].
/// `remove` drops the element last returned; cursors over synthesized
/// elements (ranges, fills, random samples, lazy views) cannot do that and
/// report [`error::Error::Unsupported`].
pub trait Cursor: Iterator {
    fn advance(&mut self) -> error::Result<Self::Item> {
        self.next().ok_or(error::Error::Exhausted)
    }

    fn remove(&mut self) -> error::Result<()> {
        Err(error::Error::Unsupported("remove"))
    }
}

impl<T> Cursor for BoxedIter<'_, T> {}

/// A single-slot buffer holding an element that was pulled ahead of time.
#[derive(Debug, Clone)]
pub(crate) struct Lookahead<T> {
    slot: Option<T>,
}

impl<T> Default for Lookahead<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Lookahead<T> {
    pub(crate) fn is_filled(&self) -> bool {
        self.slot.is_some()
    }

    /// Fill the slot. The slot must be empty.
    pub(crate) fn fill(&mut self, value: T) {
        debug_assert!(self.slot.is_none(), "lookahead slot already filled");
        self.slot = Some(value);
    }

    /// Take the buffered element out, leaving the slot empty.
    pub(crate) fn drain(&mut self) -> Option<T> {
        self.slot.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_past_end() {
        let mut iter: BoxedIter<'_, i32> = Box::new(vec![1].into_iter());
        assert_eq!(iter.advance(), Ok(1));
        assert_eq!(iter.advance(), Err(error::Error::Exhausted));
        assert_eq!(iter.remove(), Err(error::Error::Unsupported("remove")));
    }

    #[test]
    fn test_lookahead_fill_drain() {
        let mut lookahead = Lookahead::default();
        assert!(!lookahead.is_filled());
        lookahead.fill('a');
        assert!(lookahead.is_filled());
        assert_eq!(lookahead.drain(), Some('a'));
        assert_eq!(lookahead.drain(), None);
    }
}
