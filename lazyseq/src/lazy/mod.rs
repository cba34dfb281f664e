//! Lazy views over a source sequence.
//!
//! None of these run their closures at construction time. Each traversal
//! pulls from a fresh upstream cursor and applies the closures again.

mod decorator;
mod filter;
mod flat_map;
mod map;

pub use decorator::{Decoration, Decorator};
pub use filter::{FilterIter, Filtering, LazyFilter};
pub use flat_map::{Expander, FlatMap, FlatMapIter};
pub use map::{Map, MapIter};
