//! # Random Sources
//!
//! Every random decision of the generator is a uniform draw in `[0, 1)` taken
//! from a [`RandomSource`]. Any `rand` generator is a source; [`FixedSequence`]
//! replays scripted draws to pin down exact outcomes.

use rand::{Rng, RngCore};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[min, max]`, from a single draw.
    fn int_in(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max, "empty range {}..={}", min, max);
        let span = (max - min + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i64;
        // Guards against sources that hand out exactly 1.0
        min + offset.min(max - min)
    }

    /// Uniform index into a collection of `len` elements.
    fn index(&mut self, len: usize) -> usize {
        self.int_in(0, len as i64 - 1) as usize
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// # Examples
///
/// ```
/// use emporium::{FixedSequence, RandomSource};
///
/// let mut rng = FixedSequence::new(vec![0.25, 0.75]);
/// assert_eq!(rng.int_in(0, 3), 1);
/// assert_eq!(rng.int_in(0, 3), 3);
/// assert_eq!(rng.next_f64(), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    position: usize,
}

impl FixedSequence {
    /// Values outside `[0, 1)` are clamped into it.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self {
            values,
            position: 0,
        }
    }

    /// A source that always draws `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_in_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            let value = rng.int_in(3, 10);
            assert!((3..=10).contains(&value));
        }
    }

    #[test]
    fn test_int_in_maps_draws_linearly() {
        let mut rng = FixedSequence::new(vec![0.0, 0.5, 0.999]);
        assert_eq!(rng.int_in(1, 8), 1);
        assert_eq!(rng.int_in(1, 8), 5);
        assert_eq!(rng.int_in(1, 8), 8);
    }

    #[test]
    fn test_fixed_sequence_cycles_and_counts() {
        let mut rng = FixedSequence::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.next_f64(), 0.2);
        assert_eq!(rng.next_f64(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_fixed_sequence_clamps() {
        let mut rng = FixedSequence::new(vec![1.5, -0.5]);
        assert!(rng.next_f64() < 1.0);
        assert_eq!(rng.next_f64(), 0.0);
        assert_eq!(rng.int_in(0, 9), 9);
    }

    #[test]
    fn test_chance() {
        assert!(FixedSequence::constant(0.1).chance(0.9));
        assert!(!FixedSequence::constant(0.95).chance(0.9));
    }
}
