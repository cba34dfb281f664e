use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error;
use crate::sequence::cursor::Cursor;
use crate::sequence::traits::{BoxedIter, Comparator, Element, Sequence};
use crate::sequence::Seq;

/// A sequence backed by a vector. Reordering happens in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListSeq<T> {
    items: Vec<T>,
}

impl<T> Default for ListSeq<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for ListSeq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for ListSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Element> ListSeq<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Keep only the elements in `[start, end)`, clamping both bounds.
    pub(crate) fn retain_slice(&mut self, start: usize, end: usize) {
        let end = end.min(self.items.len());
        let start = start.min(end);
        self.items.truncate(end);
        self.items.drain(..start);
    }

    /// A cursor that can remove the element it returned last.
    pub fn cursor_mut(&mut self) -> ListCursor<'_, T> {
        ListCursor {
            items: &mut self.items,
            next: 0,
            last: None,
        }
    }
}

pub struct ListCursor<'a, T> {
    items: &'a mut Vec<T>,
    next: usize,
    last: Option<usize>,
}

impl<T: Clone> Iterator for ListCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.next)?.clone();
        self.last = Some(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> Cursor for ListCursor<'_, T> {
    fn remove(&mut self) -> error::Result<()> {
        let index = self
            .last
            .take()
            .ok_or(error::Error::Unsupported("remove without a current element"))?;
        self.items.remove(index);
        self.next = index;
        Ok(())
    }
}

impl<T: Element> Sequence<T> for ListSeq<T> {
    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn iter(&self) -> BoxedIter<'_, T> {
        Box::new(self.items.iter().cloned())
    }

    fn duplicate(&self) -> Seq<T> {
        Seq::new(self.clone())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, T> {
        Box::new(self.items.into_iter())
    }

    fn concat(mut self: Box<Self>, other: Seq<T>) -> Seq<T> {
        self.items.extend(other.iter());
        Seq::from_box(self)
    }

    fn slice(mut self: Box<Self>, start: usize, end: usize) -> Seq<T> {
        self.retain_slice(start, end);
        Seq::from_box(self)
    }

    fn shuffle(mut self: Box<Self>, rng: &mut dyn RngCore) -> Seq<T> {
        self.items.shuffle(rng);
        Seq::from_box(self)
    }

    fn sort_by(mut self: Box<Self>, compare: Comparator<'_, T>) -> Seq<T> {
        self.items.sort_by(|a, b| compare(a, b));
        Seq::from_box(self)
    }

    fn reverse(mut self: Box<Self>) -> Seq<T> {
        self.items.reverse();
        Seq::from_box(self)
    }
}
