//! Randomness used to break ties between equally indebted reviewers.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn choose_index(&self, len: usize) -> usize;
}

/// Draws from the thread-local generator, reseeded from the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn choose_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible source, for replaying a run from a known seed.
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn choose_index(&self, len: usize) -> usize {
        self.rng.lock().unwrap().gen_range(0..len)
    }
}
