use std::mem;

use rand::RngCore;

use crate::error;
use crate::sequence::{BoxedIter, Comparator, Element, Seq, Sequence};

/// What a [`Decorator`] changes about its delegate.
///
/// Every method defaults to forwarding to the delegate, so a decoration only
/// overrides what it actually changes.
pub trait Decoration<T: Element>: Clone + 'static {
    fn len(&self, delegate: &Seq<T>) -> usize {
        delegate.len()
    }

    fn iter<'a>(&'a self, delegate: &'a Seq<T>) -> BoxedIter<'a, T> {
        delegate.iter()
    }

    fn into_iter_owned(self, delegate: Seq<T>) -> BoxedIter<'static, T> {
        delegate.into_iter_owned()
    }
}

/// A sequence that wraps exactly one delegate.
///
/// Reordering and concatenation are applied to the delegate, which is then
/// swapped for the result; the decorator itself is handed back, so the
/// decoration keeps applying.
pub struct Decorator<T: Element, D> {
    delegate: Seq<T>,
    decoration: D,
}

impl<T: Element, D: Decoration<T>> Decorator<T, D> {
    pub fn new(delegate: Seq<T>, decoration: D) -> Self {
        Self {
            delegate,
            decoration,
        }
    }

    pub fn delegate(&self) -> &Seq<T> {
        &self.delegate
    }

    pub fn decoration(&self) -> &D {
        &self.decoration
    }

    fn replace_delegate(mut self: Box<Self>, f: impl FnOnce(Seq<T>) -> Seq<T>) -> Seq<T> {
        let delegate = mem::take(&mut self.delegate);
        log::debug!("decorator replaces its delegate");
        self.delegate = f(delegate);
        Seq::from_box(self)
    }
}

impl<T: Element, D: Decoration<T>> Sequence<T> for Decorator<T, D> {
    fn len(&self) -> usize {
        self.decoration.len(&self.delegate)
    }

    fn iter(&self) -> BoxedIter<'_, T> {
        self.decoration.iter(&self.delegate)
    }

    fn duplicate(&self) -> Seq<T> {
        Seq::new(Self {
            delegate: self.delegate.clone(),
            decoration: self.decoration.clone(),
        })
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, T> {
        let Self {
            delegate,
            decoration,
        } = *self;
        decoration.into_iter_owned(delegate)
    }

    fn concat(self: Box<Self>, other: Seq<T>) -> Seq<T> {
        self.replace_delegate(|delegate| delegate.concat(other))
    }

    fn fill(mut self: Box<Self>, value: T) -> error::Result<Seq<T>> {
        let delegate = mem::take(&mut self.delegate);
        log::debug!("decorator replaces its delegate");
        self.delegate = delegate.fill(value)?;
        Ok(Seq::from_box(self))
    }

    fn shuffle(self: Box<Self>, rng: &mut dyn RngCore) -> Seq<T> {
        self.replace_delegate(|delegate| delegate.shuffle(rng))
    }

    fn sort_by(self: Box<Self>, compare: Comparator<'_, T>) -> Seq<T> {
        self.replace_delegate(|delegate| delegate.sort_by(compare))
    }

    fn sort_natural(self: Box<Self>, compare: Comparator<'_, T>) -> Seq<T> {
        self.replace_delegate(|delegate| delegate.sort_natural_by(compare))
    }

    fn reverse(self: Box<Self>) -> Seq<T> {
        self.replace_delegate(|delegate| delegate.reverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range;

    #[derive(Clone)]
    struct Passthrough;

    impl<T: Element> Decoration<T> for Passthrough {}

    #[test]
    fn test_default_decoration_forwards() {
        let seq = Seq::new(Decorator::new(Seq::from(vec![1, 2, 3]), Passthrough));
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mutations_return_same_decorator() {
        let seq = Seq::new(Decorator::new(Seq::from(vec![2, 3, 1]), Passthrough));
        let address = seq.address();
        let seq = seq.concat(Seq::from(vec![0]));
        assert_eq!(seq.address(), address);
        let seq = seq.sort();
        assert_eq!(seq.address(), address);
        let seq = seq.reverse();
        assert_eq!(seq.address(), address);
        assert_eq!(seq.to_vec(), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_reverse_acts_on_delegate() {
        let filtered = Seq::from(range::upto(6).unwrap()).filter(|n| n % 2 == 0);
        assert_eq!(filtered.reverse().to_vec(), vec![4, 2, 0]);
    }

    #[test]
    fn test_fill_stays_decorated() {
        let filtered = Seq::from(vec![1, 2, 3]).filter(|n| *n > 1);
        assert_eq!(filtered.fill(7).unwrap().to_vec(), vec![7, 7, 7]);
        let filtered = Seq::from(vec![1, 2, 3]).filter(|n| *n > 1);
        assert!(filtered.fill(0).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_is_independent() {
        let seq = Seq::new(Decorator::new(Seq::from(vec!['a', 'b']), Passthrough));
        let copy = seq.clone().reverse();
        assert_eq!(seq.to_vec(), vec!['a', 'b']);
        assert_eq!(copy.to_vec(), vec!['b', 'a']);
    }
}
