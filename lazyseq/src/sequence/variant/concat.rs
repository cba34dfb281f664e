use rand::seq::SliceRandom;
use rand::RngCore;

use crate::sequence::traits::{BoxedIter, Element, Sequence};
use crate::sequence::Seq;

/// An append buffer: concatenated sequences are copied into it at the time of
/// the `concat` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatBuffer<T> {
    items: Vec<T>,
}

impl<T> Default for ConcatBuffer<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Element> ConcatBuffer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy all elements of `other` to the end of this buffer.
    pub fn append(&mut self, other: &Seq<T>) -> &mut Self {
        self.items.extend(other.iter());
        self
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Extend<T> for ConcatBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter)
    }
}

impl<T> FromIterator<T> for ConcatBuffer<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Element> Sequence<T> for ConcatBuffer<T> {
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
        self.append(&other);
        Seq::from_box(self)
    }

    fn shuffle(mut self: Box<Self>, rng: &mut dyn RngCore) -> Seq<T> {
        self.items.shuffle(rng);
        Seq::from_box(self)
    }

    fn reverse(mut self: Box<Self>) -> Seq<T> {
        self.items.reverse();
        Seq::from_box(self)
    }
}
