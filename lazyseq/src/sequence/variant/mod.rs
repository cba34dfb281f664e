mod concat;
mod fill;
mod list;
mod set;

pub use concat::ConcatBuffer;
pub use fill::{Fill, FillIter};
pub use list::{ListCursor, ListSeq};
pub use set::SetSeq;
