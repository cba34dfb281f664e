use std::num::NonZeroUsize;

use crate::sequence::{BoxedIter, Cursor, Element, Mapper, Seq, Sequence};

/// A lazy view applying a mapper to each element of a source sequence.
pub struct Map<T: Element, R> {
    source: Seq<T>,
    mapper: Mapper<T, R>,
}

impl<T: Element, R: Element> Map<T, R> {
    pub fn new(source: Seq<T>, mapper: Mapper<T, R>) -> Self {
        Self { source, mapper }
    }
}

impl<T: Element, R: Element> Sequence<R> for Map<T, R> {
    fn len(&self) -> usize {
        self.source.len()
    }

    fn iter(&self) -> BoxedIter<'_, R> {
        Box::new(MapIter::new(self.source.iter(), self.mapper.clone()))
    }

    fn duplicate(&self) -> Seq<R> {
        Seq::new(Self {
            source: self.source.clone(),
            mapper: self.mapper.clone(),
        })
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, R> {
        let Self { source, mapper } = *self;
        Box::new(MapIter::new(source.into_iter_owned(), mapper))
    }

    // one output per input, so positional operations can go to the source

    fn repeat(self: Box<Self>, times: NonZeroUsize) -> Seq<R> {
        let Self { source, mapper } = *self;
        Seq::new(Self::new(source.repeat_times(times), mapper))
    }

    fn slice(self: Box<Self>, start: usize, end: usize) -> Seq<R> {
        let Self { source, mapper } = *self;
        Seq::new(Self::new(source.slice(start, end), mapper))
    }

    fn reverse(self: Box<Self>) -> Seq<R> {
        let Self { source, mapper } = *self;
        Seq::new(Self::new(source.reverse(), mapper))
    }
}

/// Yields mapped values, so `remove` has no source element to act on and
/// reports `Unsupported`.
pub struct MapIter<'a, T, R> {
    upstream: BoxedIter<'a, T>,
    mapper: Mapper<T, R>,
}

impl<'a, T, R> MapIter<'a, T, R> {
    pub(crate) fn new(upstream: BoxedIter<'a, T>, mapper: Mapper<T, R>) -> Self {
        Self { upstream, mapper }
    }
}

impl<T, R> Iterator for MapIter<'_, T, R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.upstream.next().map(|item| (self.mapper)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.upstream.size_hint()
    }
}

impl<T, R> Cursor for MapIter<'_, T, R> {}
