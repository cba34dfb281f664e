use std::hash::Hash;

use ahash::{HashSet, HashSetExt};
use rand::RngCore;

use crate::sequence::traits::{BoxedIter, Element, Sequence};
use crate::sequence::Seq;

/// A sequence backed by a hash set.
///
/// Iteration order is whatever the set yields, and stays the same as long as
/// the set is not modified.
#[derive(Debug, Clone)]
pub struct SetSeq<T> {
    set: HashSet<T>,
}

impl<T: Element + Hash + Eq> SetSeq<T> {
    pub fn new() -> Self {
        Self {
            set: HashSet::new(),
        }
    }

    pub fn add(&mut self, item: T) -> &mut Self {
        self.set.insert(item);
        self
    }

    pub fn add_all(&mut self, items: impl IntoIterator<Item = T>) -> &mut Self {
        self.set.extend(items);
        self
    }

    pub fn contains(&self, item: &T) -> bool {
        self.set.contains(item)
    }

    pub fn as_set(&self) -> &HashSet<T> {
        &self.set
    }
}

impl<T: Element + Hash + Eq> Default for SetSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<HashSet<T>> for SetSeq<T> {
    fn from(set: HashSet<T>) -> Self {
        Self { set }
    }
}

impl<T: Hash + Eq> FromIterator<T> for SetSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        Self { set }
    }
}

impl<T: Element + Hash + Eq> Sequence<T> for SetSeq<T> {
    #[inline]
    fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    fn iter(&self) -> BoxedIter<'_, T> {
        Box::new(self.set.iter().cloned())
    }

    fn duplicate(&self) -> Seq<T> {
        Seq::new(self.clone())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, T> {
        Box::new(self.set.into_iter())
    }

    // a set has no meaningful order to reverse or shuffle

    fn shuffle(self: Box<Self>, _rng: &mut dyn RngCore) -> Seq<T> {
        Seq::from_box(self)
    }

    fn reverse(self: Box<Self>) -> Seq<T> {
        Seq::from_box(self)
    }
}
