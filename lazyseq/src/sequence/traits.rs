use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::rc::Rc;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error;

use super::seq::Seq;
use super::variant::{ConcatBuffer, Fill, ListSeq};

pub type BoxedIter<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

pub type Comparator<'c, T> = &'c mut dyn FnMut(&T, &T) -> Ordering;

pub type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

pub type Mapper<T, R> = Rc<dyn Fn(T) -> R>;

/// Anything that can live in a sequence.
pub trait Element: Clone + 'static {}

impl<T: Clone + 'static> Element for T {}

/// The core sequence interface: every wrapper implements this.
///
/// Only `len`, `iter` and `duplicate` are required. The structural operations
/// take the boxed sequence by value so a wrapper can hand itself back
/// unchanged, mutate itself in place, or produce a different wrapper. Their
/// default implementations materialize the elements into a list first.
pub trait Sequence<T: Element> {
    /// The number of elements. Lazy views may traverse to answer this.
    fn len(&self) -> usize;

    /// A fresh cursor over the elements, independent of any other cursor.
    fn iter(&self) -> BoxedIter<'_, T>;

    /// A deep copy of this sequence.
    fn duplicate(&self) -> Seq<T>;

    fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// A cursor that owns the sequence.
    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, T> {
        Box::new(self.iter().collect::<Vec<_>>().into_iter())
    }

    fn concat(self: Box<Self>, other: Seq<T>) -> Seq<T> {
        let mut buffer = ConcatBuffer::from_iter(self.iter());
        buffer.append(&other);
        Seq::new(buffer)
    }

    fn repeat(self: Box<Self>, times: NonZeroUsize) -> Seq<T> {
        materialize::repeat(|| self.iter(), times)
    }

    fn fill(self: Box<Self>, value: T) -> error::Result<Seq<T>> {
        Ok(Seq::new(Fill::new(value, self.len())?))
    }

    fn slice(self: Box<Self>, start: usize, end: usize) -> Seq<T> {
        materialize::slice(self.iter(), start, end)
    }

    fn shuffle(self: Box<Self>, rng: &mut dyn RngCore) -> Seq<T> {
        materialize::shuffle(self.iter(), rng)
    }

    fn sort_by(self: Box<Self>, compare: Comparator<'_, T>) -> Seq<T> {
        materialize::sort_by(self.iter(), compare)
    }

    /// Sort by the natural order of the elements, which `compare` implements.
    ///
    /// Sequences that know their own order can skip the sort.
    fn sort_natural(self: Box<Self>, compare: Comparator<'_, T>) -> Seq<T> {
        self.sort_by(compare)
    }

    fn reverse(self: Box<Self>) -> Seq<T> {
        materialize::reverse(self.iter())
    }
}

/// The fallbacks of the structural operations, shared by the default trait
/// methods and by wrappers that only specialize some of their inputs.
pub(crate) mod materialize {
    use super::*;

    pub(crate) fn repeat<'a, T: Element>(
        traverse: impl Fn() -> BoxedIter<'a, T>,
        times: NonZeroUsize,
    ) -> Seq<T> {
        log::debug!("repeat {} times by materializing", times);
        let mut buffer = ConcatBuffer::default();
        // every repetition traverses the source again
        for _ in 0..times.get() {
            buffer.extend(traverse());
        }
        Seq::new(buffer)
    }

    pub(crate) fn slice<T: Element>(iter: BoxedIter<'_, T>, start: usize, end: usize) -> Seq<T> {
        let mut list = ListSeq::from_iter(iter);
        list.retain_slice(start, end);
        Seq::new(list)
    }

    pub(crate) fn shuffle<T: Element>(iter: BoxedIter<'_, T>, rng: &mut dyn RngCore) -> Seq<T> {
        log::debug!("shuffle by materializing");
        let mut items = iter.collect::<Vec<_>>();
        items.shuffle(rng);
        Seq::from(items)
    }

    pub(crate) fn sort_by<T: Element>(iter: BoxedIter<'_, T>, compare: Comparator<'_, T>) -> Seq<T> {
        log::debug!("sort by materializing");
        let mut items = iter.collect::<Vec<_>>();
        items.sort_by(|a, b| compare(a, b));
        Seq::from(items)
    }

    pub(crate) fn reverse<T: Element>(iter: BoxedIter<'_, T>) -> Seq<T> {
        let mut items = iter.collect::<Vec<_>>();
        items.reverse();
        Seq::from(items)
    }
}
