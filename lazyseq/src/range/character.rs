use std::iter::Rev;
use std::ops::RangeInclusive;

use crate::sequence::{BoxedIter, Comparator, Cursor, Seq, Sequence};

const SURROGATES: u32 = 0xDFFF - 0xD800 + 1;

/// The characters from `from` to `to`, both included.
///
/// Walks backward when `to` comes before `from`. Surrogate code points are
/// not characters and are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharRange {
    from: char,
    to: char,
}

impl CharRange {
    pub fn new(from: char, to: char) -> Self {
        Self { from, to }
    }

    pub fn start(&self) -> char {
        self.from
    }

    pub fn end(&self) -> char {
        self.to
    }

    fn bounds(&self) -> (char, char) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    pub fn contains(&self, c: char) -> bool {
        let (low, high) = self.bounds();
        low <= c && c <= high
    }

    pub fn cursor(&self) -> CharRangeIter {
        if self.from < self.to {
            CharRangeIter::Forward(self.from..=self.to)
        } else {
            CharRangeIter::Backward((self.to..=self.from).rev())
        }
    }
}

impl Sequence<char> for CharRange {
    fn len(&self) -> usize {
        let (low, high) = self.bounds();
        let (low, high) = (u32::from(low), u32::from(high));
        let mut len = high - low + 1;
        if low < 0xD800 && high > 0xDFFF {
            len -= SURROGATES;
        }
        len as usize
    }

    fn iter(&self) -> BoxedIter<'_, char> {
        Box::new(self.cursor())
    }

    fn duplicate(&self) -> Seq<char> {
        Seq::new(*self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, char> {
        Box::new(self.cursor())
    }

    fn sort_natural(self: Box<Self>, _compare: Comparator<'_, char>) -> Seq<char> {
        if self.from <= self.to {
            Seq::from_box(self)
        } else {
            self.reverse()
        }
    }

    fn reverse(self: Box<Self>) -> Seq<char> {
        Seq::new(CharRange::new(self.to, self.from))
    }
}

impl From<CharRange> for Seq<char> {
    fn from(range: CharRange) -> Self {
        Seq::new(range)
    }
}

pub enum CharRangeIter {
    Forward(RangeInclusive<char>),
    Backward(Rev<RangeInclusive<char>>),
}

impl Iterator for CharRangeIter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match self {
            Self::Forward(iter) => iter.next(),
            Self::Backward(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Forward(iter) => iter.size_hint(),
            Self::Backward(iter) => iter.size_hint(),
        }
    }
}

impl Cursor for CharRangeIter {}
