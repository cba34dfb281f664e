use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;

use rand::RngCore;

use crate::error;
use crate::lazy::{FlatMap, LazyFilter, Map};

use super::traits::{BoxedIter, Comparator, Element, Sequence};
use super::variant::{ConcatBuffer, Fill, ListSeq, SetSeq};

/// An owned sequence and the fluent API on top of it.
///
/// Structural operations consume the sequence and hand back the result,
/// which may be the same wrapper (mutated or untouched) or a new one.
/// `filter`, `map` and `flat_map` produce lazy views; nothing runs until the
/// result is traversed, and every traversal runs the functions again.
pub struct Seq<T: Element> {
    inner: Box<dyn Sequence<T>>,
}

// a sequence is a single fat pointer
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Seq<u8>, [u8; 16]);

impl<T: Element> Seq<T> {
    pub fn new(sequence: impl Sequence<T> + 'static) -> Self {
        Self {
            inner: Box::new(sequence),
        }
    }

    pub(crate) fn from_box(inner: Box<dyn Sequence<T>>) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) fn address(&self) -> *const () {
        &*self.inner as *const dyn Sequence<T> as *const ()
    }

    /// The number of elements.
    ///
    /// This traverses lazy filter and flat map views every time.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// A fresh cursor over the elements.
    pub fn iter(&self) -> BoxedIter<'_, T> {
        self.inner.iter()
    }

    /// Append the elements of `other` after the elements of this sequence.
    pub fn concat(self, other: impl Into<Seq<T>>) -> Self {
        self.inner.concat(other.into())
    }

    pub fn concat_items(self, items: impl IntoIterator<Item = T>) -> Self {
        self.concat(items.into_iter().collect::<Seq<T>>())
    }

    /// The sequence concatenated `times` times with itself.
    pub fn repeat(self, times: usize) -> error::Result<Self> {
        let times = NonZeroUsize::new(times)
            .ok_or_else(|| error::Error::InvalidArgument("n must be positive".to_string()))?;
        Ok(self.repeat_times(times))
    }

    pub(crate) fn repeat_times(self, times: NonZeroUsize) -> Self {
        self.inner.repeat(times)
    }

    /// A sequence of the same size holding only `value`.
    pub fn fill(self, value: T) -> error::Result<Self> {
        self.inner.fill(value)
    }

    /// The elements in `[start, end)`. Both bounds are clamped to the length.
    pub fn slice(self, start: usize, end: usize) -> Self {
        self.inner.slice(start, end)
    }

    /// The first `end` elements.
    pub fn take(self, end: usize) -> Self {
        self.slice(0, end)
    }

    pub fn shuffle(self, rng: &mut dyn RngCore) -> Self {
        self.inner.shuffle(rng)
    }

    pub fn sort(self) -> Self
    where
        T: Ord,
    {
        self.inner.sort_natural(&mut |a: &T, b: &T| a.cmp(b))
    }

    pub(crate) fn sort_natural_by(self, compare: Comparator<'_, T>) -> Self {
        self.inner.sort_natural(compare)
    }

    pub fn sort_by(self, mut compare: impl FnMut(&T, &T) -> Ordering) -> Self {
        self.inner.sort_by(&mut compare)
    }

    pub fn reverse(self) -> Self {
        self.inner.reverse()
    }

    /// A lazy view of the elements accepted by `predicate`.
    pub fn filter(self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        Seq::new(LazyFilter::filtering(self, Rc::new(predicate)))
    }

    /// A lazy view of the elements rejected by `predicate`.
    pub fn reject(self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.filter(move |item| !predicate(item))
    }

    /// A lazy view applying `mapper` to every element.
    pub fn map<R: Element>(self, mapper: impl Fn(T) -> R + 'static) -> Seq<R> {
        Seq::new(Map::new(self, Rc::new(mapper)))
    }

    /// A lazy view over the concatenated expansions of every element.
    ///
    /// Asking the result for its length traverses everything.
    pub fn flat_map<R, S>(self, mapper: impl Fn(T) -> S + 'static) -> Seq<R>
    where
        R: Element,
        S: Into<Seq<R>>,
    {
        Seq::new(FlatMap::new(
            self,
            Rc::new(move |item: T| -> Seq<R> { mapper(item).into() }),
        ))
    }

    /// Call `f` on every element, then hand back the sequence.
    pub fn each(self, mut f: impl FnMut(T)) -> Self {
        for item in self.iter() {
            f(item);
        }
        self
    }

    /// Fold the elements from first to last.
    pub fn reduce<A>(&self, initial: A, f: impl FnMut(A, T) -> A) -> A {
        self.iter().fold(initial, f)
    }

    /// The first element accepted by `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> error::Result<T> {
        self.iter()
            .find(|item| predicate(item))
            .ok_or(error::Error::NotFound)
    }

    pub fn any(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.iter().any(|item| predicate(&item))
    }

    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.iter().all(|item| predicate(&item))
    }

    /// The position of the first element accepted by `predicate`.
    pub fn index_of(&self, predicate: impl Fn(&T) -> bool) -> Option<usize> {
        self.iter().position(|item| predicate(&item))
    }

    /// The display forms of the elements with `separator` between them.
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut joined = String::new();
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                joined.push_str(separator);
            }
            joined.push_str(&item.to_string());
        }
        joined
    }

    pub fn join_plain(&self) -> String
    where
        T: fmt::Display,
    {
        self.join("")
    }

    pub fn into_iter_owned(self) -> BoxedIter<'static, T> {
        self.inner.into_iter_owned()
    }
}

impl<T: Element> Clone for Seq<T> {
    fn clone(&self) -> Self {
        self.inner.duplicate()
    }
}

impl<T: Element> Default for Seq<T> {
    fn default() -> Self {
        Seq::new(ListSeq::default())
    }
}

impl<T: Element> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq").finish_non_exhaustive()
    }
}

impl<T: Element> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Seq::new(ListSeq::from(items))
    }
}

impl<T: Element, const N: usize> From<[T; N]> for Seq<T> {
    fn from(items: [T; N]) -> Self {
        Seq::new(ListSeq::from(Vec::from(items)))
    }
}

impl<T: Element> From<&[T]> for Seq<T> {
    fn from(items: &[T]) -> Self {
        Seq::new(ListSeq::from(items.to_vec()))
    }
}

impl<T: Element + std::hash::Hash + Eq> From<ahash::HashSet<T>> for Seq<T> {
    fn from(set: ahash::HashSet<T>) -> Self {
        Seq::new(SetSeq::from(set))
    }
}

impl<T: Element> From<ListSeq<T>> for Seq<T> {
    fn from(list: ListSeq<T>) -> Self {
        Seq::new(list)
    }
}

impl<T: Element + std::hash::Hash + Eq> From<SetSeq<T>> for Seq<T> {
    fn from(set: SetSeq<T>) -> Self {
        Seq::new(set)
    }
}

impl<T: Element> From<ConcatBuffer<T>> for Seq<T> {
    fn from(buffer: ConcatBuffer<T>) -> Self {
        Seq::new(buffer)
    }
}

impl<T: Element> From<Fill<T>> for Seq<T> {
    fn from(fill: Fill<T>) -> Self {
        Seq::new(fill)
    }
}

/// Drains any iterator into a list-backed sequence.
impl<T: Element> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::new(iter.into_iter().collect::<ListSeq<T>>())
    }
}

impl<T: Element> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = BoxedIter<'static, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_iter_owned()
    }
}

impl<'a, T: Element> IntoIterator for &'a Seq<T> {
    type Item = T;
    type IntoIter = BoxedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::range;

    #[test]
    fn test_join() {
        let seq = Seq::from(vec!["a", "b", "c"]);
        assert_eq!(seq.join(","), "a,b,c");
        assert_eq!(seq.join_plain(), "abc");
        assert_eq!(Seq::<i32>::default().join(","), "");
        assert_eq!(Seq::from(vec![1]).join(", "), "1");
    }

    #[test]
    fn test_repeat_zero_rejected() {
        let seq = Seq::from(vec![1, 2]);
        assert!(matches!(
            seq.repeat(0),
            Err(error::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_repeat_preserves_order() {
        let seq = Seq::from(vec![1, 2, 3]).repeat(2).unwrap();
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_fill_keeps_size() {
        let seq = Seq::from(vec!["a", "b", "c"]).fill("z").unwrap();
        assert_eq!(seq.to_vec(), vec!["z", "z", "z"]);
    }

    #[test]
    fn test_fill_empty_rejected() {
        assert!(matches!(
            Seq::<u8>::default().fill(0),
            Err(error::Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_find() {
        let seq = Seq::from(vec![1, 4, 9, 16]);
        assert_eq!(seq.find(|n| *n > 5), Ok(9));
        assert_eq!(seq.find(|n| *n > 100), Err(error::Error::NotFound));
    }

    #[test]
    fn test_any_all_short_circuit() {
        let visited = Cell::new(0);
        let seq = Seq::from(vec![1, 2, 3, 4]);
        assert!(seq.any(|n| {
            visited.set(visited.get() + 1);
            *n == 2
        }));
        assert_eq!(visited.get(), 2);
        assert!(!seq.all(|n| *n < 3));
        assert!(seq.all(|n| *n > 0));
    }

    #[test]
    fn test_index_of() {
        let seq = Seq::from(vec!['x', 'y', 'z']);
        assert_eq!(seq.index_of(|c| *c == 'z'), Some(2));
        assert_eq!(seq.index_of(|c| *c == 'w'), None);
    }

    #[test]
    fn test_reduce_left_to_right() {
        let seq = Seq::from(vec!["a", "b", "c"]);
        let folded = seq.reduce(String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(folded, "abc");
    }

    #[test]
    fn test_each_returns_self() {
        let mut seen = Vec::new();
        let seq = Seq::from(vec![3, 2, 1]).each(|n| seen.push(n));
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn test_slice_and_take() {
        let seq: Seq<i32> = range::upto(10).unwrap().into();
        assert_eq!(seq.clone().slice(2, 5).to_vec(), vec![2, 3, 4]);
        assert_eq!(seq.take(3).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_concat_items() {
        let seq = Seq::from([1, 2]).concat_items(3..5);
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Seq::from(vec![1, 2, 3]);
        let reversed = original.clone().reverse();
        assert_eq!(original.to_vec(), vec![1, 2, 3]);
        assert_eq!(reversed.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_into_iterator() {
        let seq = Seq::from(vec![1, 2, 3]);
        let mut total = 0;
        for n in &seq {
            total += n;
        }
        assert_eq!(total, 6);
        assert_eq!(seq.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
