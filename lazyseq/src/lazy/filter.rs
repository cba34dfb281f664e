use crate::sequence::{BoxedIter, Cursor, Element, Lookahead, Predicate, Seq};

use super::decorator::{Decoration, Decorator};

/// A lazy view of the elements of a sequence that a predicate accepts.
pub type LazyFilter<T> = Decorator<T, Filtering<T>>;

impl<T: Element> LazyFilter<T> {
    pub fn filtering(source: Seq<T>, predicate: Predicate<T>) -> Self {
        Decorator::new(source, Filtering { predicate })
    }
}

/// Keeps the elements that `predicate` accepts.
#[derive(Clone)]
pub struct Filtering<T> {
    predicate: Predicate<T>,
}

impl<T: Element> Decoration<T> for Filtering<T> {
    fn len(&self, delegate: &Seq<T>) -> usize {
        // a separate scan; an iteration in progress is not disturbed
        delegate.iter().filter(|item| (self.predicate)(item)).count()
    }

    fn iter<'a>(&'a self, delegate: &'a Seq<T>) -> BoxedIter<'a, T> {
        Box::new(FilterIter::new(delegate.iter(), self.predicate.clone()))
    }

    fn into_iter_owned(self, delegate: Seq<T>) -> BoxedIter<'static, T> {
        Box::new(FilterIter::new(delegate.into_iter_owned(), self.predicate))
    }
}

/// A cursor that looks ahead at most one accepted element.
///
/// `remove` is unsupported: the lookahead may already have pulled past the
/// element last returned, so there is no upstream position to remove at.
pub struct FilterIter<'a, T> {
    upstream: BoxedIter<'a, T>,
    predicate: Predicate<T>,
    lookahead: Lookahead<T>,
}

impl<'a, T> FilterIter<'a, T> {
    pub(crate) fn new(upstream: BoxedIter<'a, T>, predicate: Predicate<T>) -> Self {
        Self {
            upstream,
            predicate,
            lookahead: Lookahead::default(),
        }
    }

    /// Whether another accepted element exists.
    ///
    /// Pulls from upstream until the predicate accepts something or upstream
    /// runs out. The accepted element is kept for the next call to `next`.
    pub fn has_next(&mut self) -> bool {
        if !self.lookahead.is_filled() {
            for item in self.upstream.by_ref() {
                if (self.predicate)(&item) {
                    self.lookahead.fill(item);
                    break;
                }
            }
        }
        self.lookahead.is_filled()
    }
}

impl<T> Iterator for FilterIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.has_next() {
            self.lookahead.drain()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.lookahead.is_filled());
        let (_, upper) = self.upstream.size_hint();
        (buffered, upper.and_then(|upper| upper.checked_add(buffered)))
    }
}

impl<T> Cursor for FilterIter<'_, T> {}
