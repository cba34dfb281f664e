use std::rc::Rc;

use crate::sequence::{BoxedIter, Cursor, Element, Seq, Sequence};

pub type Expander<T, R> = Rc<dyn Fn(T) -> Seq<R>>;

/// A lazy view over the concatenation of the sequences each element expands
/// into.
pub struct FlatMap<T: Element, R: Element> {
    source: Seq<T>,
    mapper: Expander<T, R>,
}

impl<T: Element, R: Element> FlatMap<T, R> {
    pub fn new(source: Seq<T>, mapper: Expander<T, R>) -> Self {
        Self { source, mapper }
    }
}

impl<T: Element, R: Element> Sequence<R> for FlatMap<T, R> {
    /// Expands every element. Avoid on large sources.
    fn len(&self) -> usize {
        log::debug!("flat map length requires a full traversal");
        self.iter().count()
    }

    fn iter(&self) -> BoxedIter<'_, R> {
        Box::new(FlatMapIter::new(self.source.iter(), self.mapper.clone()))
    }

    fn duplicate(&self) -> Seq<R> {
        Seq::new(Self {
            source: self.source.clone(),
            mapper: self.mapper.clone(),
        })
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, R> {
        let Self { source, mapper } = *self;
        Box::new(FlatMapIter::new(source.into_iter_owned(), mapper))
    }
}

/// Drains one expanded sequence at a time.
pub struct FlatMapIter<'a, T, R: Element> {
    upstream: BoxedIter<'a, T>,
    mapper: Expander<T, R>,
    inner: Option<BoxedIter<'static, R>>,
}

impl<'a, T, R: Element> FlatMapIter<'a, T, R> {
    pub(crate) fn new(upstream: BoxedIter<'a, T>, mapper: Expander<T, R>) -> Self {
        Self {
            upstream,
            mapper,
            inner: None,
        }
    }
}

impl<T, R: Element> Iterator for FlatMapIter<'_, T, R> {
    type Item = R;

    fn next(&mut self) -> Option<R> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.next() {
                    return Some(item);
                }
                self.inner = None;
            }
            // the current expansion is drained, expand the next element
            let item = self.upstream.next()?;
            self.inner = Some((self.mapper)(item).into_iter_owned());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self
            .inner
            .as_ref()
            .map_or(0, |inner| inner.size_hint().0);
        (buffered, None)
    }
}

impl<T, R: Element> Cursor for FlatMapIter<'_, T, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;
    use crate::range;

    #[test]
    fn test_flattens_in_order() {
        let seq: Seq<i32> =
            Seq::from(vec![vec![1, 2], vec![3]]).flat_map(|items: Vec<i32>| items);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_skips_empty_expansions() {
        let seq: Seq<i32> =
            Seq::from(vec![0, 2, 0, 1, 0]).flat_map(|n| Seq::from(range::upto(n).unwrap()));
        assert_eq!(seq.to_vec(), vec![0, 1, 0]);
    }

    #[test]
    fn test_stays_exhausted() {
        let seq = Seq::from(vec!["ab", "c"]).flat_map(|s: &str| s.chars().collect::<Seq<_>>());
        let seq: Seq<char> = seq;
        let mut iter = seq.iter();
        assert_eq!(iter.advance(), Ok('a'));
        assert_eq!(iter.advance(), Ok('b'));
        assert_eq!(iter.advance(), Ok('c'));
        assert_eq!(iter.advance(), Err(error::Error::Exhausted));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_nested_flat_map() {
        let seq: Seq<i32> = Seq::from(vec![1, 2])
            .flat_map::<i32, _>(|n| vec![n, n * 10])
            .flat_map(|n| vec![n; 2]);
        assert_eq!(seq.join(","), "1,1,10,10,2,2,20,20");
    }
}
