use std::hash::Hash;

use ahash::HashSet;

use super::seq::Seq;
use super::traits::Element;

/// A contiguous array of one primitive type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PrimitiveArray {
    Bool(Box<[bool]>),
    I8(Box<[i8]>),
    I16(Box<[i16]>),
    I32(Box<[i32]>),
    I64(Box<[i64]>),
    Char(Box<[char]>),
    F32(Box<[f32]>),
    F64(Box<[f64]>),
}

impl PrimitiveArray {
    pub fn len(&self) -> usize {
        match self {
            PrimitiveArray::Bool(items) => items.len(),
            PrimitiveArray::I8(items) => items.len(),
            PrimitiveArray::I16(items) => items.len(),
            PrimitiveArray::I32(items) => items.len(),
            PrimitiveArray::I64(items) => items.len(),
            PrimitiveArray::Char(items) => items.len(),
            PrimitiveArray::F32(items) => items.len(),
            PrimitiveArray::F64(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Element types that have a [`PrimitiveArray`] variant.
pub trait Primitive: Element + Copy {
    fn into_array(items: Vec<Self>) -> PrimitiveArray;
}

// one impl per variant; there are few enough that a derive isn't worth it
macro_rules! primitive {
    ($ty:ty, $variant:ident) => {
        impl Primitive for $ty {
            fn into_array(items: Vec<Self>) -> PrimitiveArray {
                PrimitiveArray::$variant(items.into_boxed_slice())
            }
        }
    };
}

primitive!(bool, Bool);
primitive!(i8, I8);
primitive!(i16, I16);
primitive!(i32, I32);
primitive!(i64, I64);
primitive!(char, Char);
primitive!(f32, F32);
primitive!(f64, F64);

impl<T: Element> Seq<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub fn to_set(&self) -> HashSet<T>
    where
        T: Hash + Eq,
    {
        self.iter().collect()
    }

    /// Copy the elements into a collection made by `factory`.
    pub fn to_collection<C, F>(&self, factory: F) -> C
    where
        C: Extend<T>,
        F: FnOnce() -> C,
    {
        let mut collection = factory();
        collection.extend(self.iter());
        collection
    }

    pub fn to_array(&self) -> Box<[T]> {
        self.to_vec().into_boxed_slice()
    }

    /// The elements in their natural order.
    pub fn to_sorted_array(&self) -> Box<[T]>
    where
        T: Ord,
    {
        let mut items = self.to_vec();
        items.sort();
        items.into_boxed_slice()
    }

    pub fn to_primitive_array(&self) -> PrimitiveArray
    where
        T: Primitive,
    {
        T::into_array(self.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use super::*;
    use crate::range;

    #[test]
    fn test_to_set_deduplicates() {
        let set = Seq::from(vec![1, 2, 2, 3, 1]).to_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains(&2));
    }

    #[test]
    fn test_to_collection_by_factory() {
        let seq = Seq::from(vec![3, 1, 2, 3]);
        let ordered = seq.to_collection(BTreeSet::new);
        assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        let deque = seq.to_collection(|| VecDeque::from(vec![0]));
        assert_eq!(deque, VecDeque::from(vec![0, 3, 1, 2, 3]));
    }

    #[test]
    fn test_to_array() {
        let seq: Seq<char> = range::chars('a', 'c').into();
        assert_eq!(&*seq.to_array(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_to_sorted_array() {
        let seq = Seq::from(vec!["pear", "apple", "fig"]);
        assert_eq!(&*seq.to_sorted_array(), &["apple", "fig", "pear"]);
        assert_eq!(seq.to_vec(), vec!["pear", "apple", "fig"]);
        let down: Seq<i32> = range::range(3, 0).unwrap().into();
        assert_eq!(&*down.to_sorted_array(), &[0, 1, 2]);
    }

    #[test]
    fn test_to_primitive_array() {
        let seq: Seq<i64> = range::upto(3i64).unwrap().into();
        assert_eq!(
            seq.to_primitive_array(),
            PrimitiveArray::I64(vec![0, 1, 2].into_boxed_slice())
        );
        let flags = Seq::from(vec![true, false]).to_primitive_array();
        assert!(matches!(flags, PrimitiveArray::Bool(_)));
        assert_eq!(flags.len(), 2);
        assert!(Seq::<f32>::default().to_primitive_array().is_empty());
    }
}
