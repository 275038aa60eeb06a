//! Source of randomness for pivot selection and shuffling.
//!
//! Sorts never reach for an ambient RNG. They take a [`RandomSource`], so tests can swap in a
//! [`SeededRandom`] or a hand-written deterministic source and get reproducible runs.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Returns a uniformly distributed integer in `lo..=hi`.
    ///
    /// Callers guarantee `lo <= hi`.
    fn gen_range(&mut self, lo: usize, hi: usize) -> usize;

    /// Returns a uniformly selected index into a sequence of length `len`, or `None` if `len` is
    /// zero.
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        Some(self.gen_range(0, len - 1))
    }

    /// Returns a uniformly selected element of `v`, or `None` if `v` is empty.
    fn pick<'a, T>(&mut self, v: &'a [T]) -> Option<&'a T> {
        self.pick_index(v.len()).and_then(|i| v.get(i))
    }

    /// Shuffles `v` in place using the Fisher-Yates algorithm.
    fn shuffle<T>(&mut self, v: &mut [T]) {
        let len = v.len();
        if len < 2 {
            return;
        }

        for i in 0..len - 1 {
            let j = self.gen_range(i, len - 1);
            if i != j {
                v.swap(i, j);
            }
        }
    }
}

/// Draws from the thread-local generator of `rand`. Used by default.
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    #[inline]
    fn gen_range(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.gen_range(lo..=hi)
    }
}

/// Reproducible source, the same seed always yields the same sequence of values.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn gen_range(&mut self, lo: usize, hi: usize) -> usize {
        self.rng.gen_range(lo..=hi)
    }
}
