use rand::{Rng, RngCore};

use crate::error;
use crate::sequence::{BoxedIter, Cursor, Element, Seq, Sequence};

use super::generator::GeneratorRef;

/// Draws one value from a generator.
pub trait Sampler: Clone + 'static {
    type Output: Element;

    fn sample(&self, rng: &mut dyn RngCore) -> Self::Output;
}

/// Uniform doubles in `[0, up_to)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformF64 {
    up_to: f64,
}

impl UniformF64 {
    pub fn new(up_to: f64) -> error::Result<Self> {
        error::require(up_to.is_finite(), "upper bound must be finite")?;
        Ok(Self { up_to })
    }
}

impl Sampler for UniformF64 {
    type Output = f64;

    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        rng.gen::<f64>() * self.up_to
    }
}

/// Uniform floats in `[0, up_to)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformF32 {
    up_to: f32,
}

impl UniformF32 {
    pub fn new(up_to: f32) -> error::Result<Self> {
        error::require(up_to.is_finite(), "upper bound must be finite")?;
        Ok(Self { up_to })
    }
}

impl Sampler for UniformF32 {
    type Output = f32;

    fn sample(&self, rng: &mut dyn RngCore) -> f32 {
        rng.gen::<f32>() * self.up_to
    }
}

/// A raw signed 64-bit draw reduced with `%`.
///
/// Known defect: this is biased towards small remainders, and a negative
/// draw gives a negative result. Values fall in `(-|up_to|, |up_to|)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuloI64 {
    up_to: i64,
}

impl ModuloI64 {
    pub fn new(up_to: i64) -> error::Result<Self> {
        error::require(up_to != 0, "upper bound must not be zero")?;
        Ok(Self { up_to })
    }
}

impl Sampler for ModuloI64 {
    type Output = i64;

    fn sample(&self, rng: &mut dyn RngCore) -> i64 {
        (rng.next_u64() as i64).wrapping_rem(self.up_to)
    }
}

/// A fixed number of samples, drawn anew on every traversal.
#[derive(Debug, Clone)]
pub struct RandomSamples<S> {
    sampler: S,
    samples: usize,
    generator: GeneratorRef,
}

impl<S: Sampler> RandomSamples<S> {
    pub fn new(sampler: S, samples: usize, generator: GeneratorRef) -> error::Result<Self> {
        error::require(samples > 0, "samples must be positive")?;
        Ok(Self {
            sampler,
            samples,
            generator,
        })
    }

    /// Set the number of samples per traversal.
    pub fn samples(&mut self, samples: usize) -> error::Result<&mut Self> {
        error::require(samples > 0, "samples must be positive")?;
        self.samples = samples;
        Ok(self)
    }

    /// Draw from `generator` from now on.
    pub fn generator(&mut self, generator: GeneratorRef) -> &mut Self {
        self.generator = generator;
        self
    }

    pub fn cursor(&self) -> RandomIter<S> {
        RandomIter {
            sampler: self.sampler.clone(),
            generator: self.generator.clone(),
            remaining: self.samples,
        }
    }
}

impl<S: Sampler> Sequence<S::Output> for RandomSamples<S> {
    #[inline]
    fn len(&self) -> usize {
        self.samples
    }

    fn iter(&self) -> BoxedIter<'_, S::Output> {
        Box::new(self.cursor())
    }

    /// The copy shares the generator.
    fn duplicate(&self) -> Seq<S::Output> {
        Seq::new(self.clone())
    }

    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    fn into_iter_owned(self: Box<Self>) -> BoxedIter<'static, S::Output> {
        Box::new(self.cursor())
    }

    /// Draw fewer samples. Bounds that are not `start < end <= len` leave
    /// the sequence unchanged.
    fn slice(mut self: Box<Self>, start: usize, end: usize) -> Seq<S::Output> {
        if start < end && end <= self.samples {
            self.samples = end - start;
        }
        Seq::from_box(self)
    }

    // independent draws have no order to change

    fn shuffle(self: Box<Self>, _rng: &mut dyn RngCore) -> Seq<S::Output> {
        Seq::from_box(self)
    }

    fn reverse(self: Box<Self>) -> Seq<S::Output> {
        Seq::from_box(self)
    }
}

impl<S: Sampler> From<RandomSamples<S>> for Seq<S::Output> {
    fn from(samples: RandomSamples<S>) -> Self {
        Seq::new(samples)
    }
}

/// Single pass: each call to `next` advances the shared generator.
pub struct RandomIter<S> {
    sampler: S,
    generator: GeneratorRef,
    remaining: usize,
}

impl<S: Sampler> Iterator for RandomIter<S> {
    type Item = S::Output;

    fn next(&mut self) -> Option<S::Output> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.sampler.sample(&mut self.generator))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Sampler> Cursor for RandomIter<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomBuilder;

    fn doubles(seed: u64, samples: usize) -> RandomSamples<UniformF64> {
        let mut builder = RandomBuilder::new();
        builder.seed(seed).samples(samples);
        builder.doubles(10.0).unwrap()
    }

    #[test]
    fn test_values_in_bounds() {
        let seq = Seq::from(doubles(11, 100));
        let values = seq.to_vec();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (0.0..10.0).contains(v)));
    }

    #[test]
    fn test_each_traversal_draws_again() {
        let seq = Seq::from(doubles(7, 5));
        let first = seq.to_vec();
        let second = seq.to_vec();
        assert_eq!(first.len(), second.len());
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_same_values() {
        assert_eq!(
            Seq::from(doubles(3, 4)).to_vec(),
            Seq::from(doubles(3, 4)).to_vec()
        );
    }

    #[test]
    fn test_slice_reduces_samples() {
        let seq = Seq::from(doubles(1, 10)).slice(2, 5);
        assert_eq!(seq.len(), 3);
        let seq = Seq::from(doubles(1, 10)).slice(5, 20);
        assert_eq!(seq.len(), 10);
        let seq = Seq::from(doubles(1, 10)).slice(4, 4);
        assert_eq!(seq.len(), 10);
    }

    #[test]
    fn test_samples_setter() {
        let mut samples = doubles(1, 10);
        assert!(matches!(
            samples.samples(0),
            Err(error::Error::InvalidArgument(_))
        ));
        samples.samples(2).unwrap().generator(GeneratorRef::seeded(9));
        assert_eq!(Seq::from(samples).to_vec().len(), 2);
    }

    #[test]
    fn test_shuffle_and_reverse_are_identity() {
        let mut rng = GeneratorRef::seeded(0);
        let seq = Seq::from(doubles(1, 6)).shuffle(&mut rng).reverse();
        assert_eq!(seq.len(), 6);
    }

    #[test]
    fn test_modulo_longs() {
        assert!(matches!(
            ModuloI64::new(0),
            Err(error::Error::InvalidArgument(_))
        ));
        let mut builder = RandomBuilder::new();
        builder.seed(21).samples(50);
        let seq = Seq::from(builder.longs(6).unwrap());
        assert!(seq.all(|n| -6 < *n && *n < 6));
    }

    #[test]
    fn test_floats() {
        let mut builder = RandomBuilder::new();
        builder.seed(8).samples(20);
        let seq = Seq::from(builder.floats(1.0).unwrap());
        assert!(seq.all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_cursor_remove_unsupported() {
        let samples = doubles(2, 1);
        let mut cursor = samples.cursor();
        assert!(cursor.advance().is_ok());
        assert_eq!(cursor.advance(), Err(error::Error::Exhausted));
        assert_eq!(cursor.remove(), Err(error::Error::Unsupported("remove")));
    }
}
