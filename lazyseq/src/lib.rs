//! Fluent, lazily evaluated sequences.
//!
//! A [`Seq`] wraps anything that implements [`Sequence`]: lists, sets,
//! numeric, character and date ranges, fills and random samples. `filter`,
//! `map` and `flat_map` build lazy views that only run their functions when
//! the sequence is traversed.
//!
//! ```rust
//! use lazyseq::{range, Seq};
//!
//! let numbers: Seq<i32> = range::upto(10i32)?.into();
//! let evens = numbers.filter(|n| n % 2 == 0).map(|n| n * 10);
//! assert_eq!(evens.join(","), "0,20,40,60,80");
//!
//! let down: Seq<i32> = range::upto(-3i32)?.into();
//! assert_eq!(down.join(","), "0,-1,-2");
//! # Ok::<(), lazyseq::Error>(())
//! ```

pub mod error;
pub mod lazy;
pub mod random;
pub mod range;
pub mod sequence;

pub use error::{Error, Result};
pub use sequence::{BoxedIter, Cursor, Element, Sequence, Seq};
