mod conversion;
pub(crate) mod cursor;
mod seq;
pub(crate) mod traits;
mod variant;

pub use conversion::{Primitive, PrimitiveArray};
pub use cursor::Cursor;
pub(crate) use cursor::Lookahead;
pub use seq::Seq;
pub(crate) use traits::materialize;
pub use traits::{BoxedIter, Comparator, Element, Mapper, Predicate, Sequence};
pub use variant::{ConcatBuffer, Fill, FillIter, ListCursor, ListSeq, SetSeq};
