//! Sequences of pseudorandom samples.
//!
//! A sample sequence draws fresh values on every traversal from a generator
//! it shares with its copies, so two traversals generally differ.

mod generator;
mod samples;

pub use generator::{GeneratorRef, RandomBuilder};
pub use samples::{ModuloI64, RandomIter, RandomSamples, Sampler, UniformF32, UniformF64};
