//! Random source for word selection and masking
//!
//! The generator is seeded once and then reused for every draw, so consecutive
//! draws stay independent of each other.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed integers
pub trait RandomSource {
    /// Draw an integer uniformly from `[0, max)`
    ///
    /// # Panics
    /// Implementations panic when `max == 0`; callers must never ask for an
    /// empty range.
    fn random_int(&mut self, max: usize) -> usize;

    /// Fair coin flip, defined as `random_int(2) == 0`
    fn coin_flip(&mut self) -> bool {
        self.random_int(2) == 0
    }
}

/// Pseudo-random generator seeded a single time at construction
///
/// Not cryptographically secure and never reseeded.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Seed from the wall clock (nanoseconds since the Unix epoch)
    #[must_use]
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        tracing::debug!(seed, "seeded random source from clock");
        Self::with_seed(seed)
    }

    /// Seed explicitly, giving a reproducible sequence
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_int(&mut self, max: usize) -> usize {
        assert!(max > 0, "random_int requires a non-empty range");
        self.rng.random_range(0..max)
    }
}

/// Replays a fixed list of draws, for forcing rounds in tests
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    draws: std::collections::VecDeque<usize>,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Index draw followed by one heads flip per character
    pub(crate) fn full_reveal(index: usize, word_len: usize) -> Self {
        Self::new(std::iter::once(index).chain(std::iter::repeat_n(0, word_len)))
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn random_int(&mut self, max: usize) -> usize {
        let draw = self.draws.pop_front().expect("scripted draws exhausted");
        assert!(draw < max, "scripted draw {draw} outside [0, {max})");
        draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_within_bound() {
        let mut rng = SeededRandom::from_clock();
        for max in [1, 2, 3, 7, 116, 1000] {
            for _ in 0..2_000 {
                assert!(rng.random_int(max) < max);
            }
        }
    }

    #[test]
    fn bound_of_one_always_yields_zero() {
        let mut rng = SeededRandom::with_seed(7);
        assert!((0..100).all(|_| rng.random_int(1) == 0));
    }

    #[test]
    fn draws_are_roughly_uniform() {
        const BUCKETS: usize = 10;
        const SAMPLES: usize = 100_000;

        let mut rng = SeededRandom::with_seed(0x5eed);
        let mut counts = [0usize; BUCKETS];
        for _ in 0..SAMPLES {
            counts[rng.random_int(BUCKETS)] += 1;
        }

        let expected = SAMPLES as f64 / BUCKETS as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();

        // df = 9, p < 0.0001 beyond 33.7
        assert!(chi_square < 33.7, "chi-square {chi_square:.2} too large");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRandom::with_seed(42);
        let mut b = SeededRandom::with_seed(42);
        let left: Vec<usize> = (0..50).map(|_| a.random_int(116)).collect();
        let right: Vec<usize> = (0..50).map(|_| b.random_int(116)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn coin_flip_produces_both_sides() {
        let mut rng = SeededRandom::with_seed(3);
        let heads = (0..1_000).filter(|_| rng.coin_flip()).count();
        assert!(heads > 400 && heads < 600, "heads = {heads}");
    }

    #[test]
    #[should_panic(expected = "non-empty range")]
    fn zero_bound_is_rejected() {
        let mut rng = SeededRandom::with_seed(1);
        let _ = rng.random_int(0);
    }

    #[test]
    fn scripted_random_replays_in_order() {
        let mut rng = ScriptedRandom::new([1, 0, 1]);
        assert_eq!(rng.random_int(2), 1);
        assert!(rng.coin_flip());
        assert!(!rng.coin_flip());
    }
}
