//! Deterministic RNG wrappers for scenario generation and robot decisions.
//!
//! # Determinism strategy
//!
//! Scenario generation draws from one global [`SimRng`] seeded with
//! `SimConfig::seed`.  Robot decisions inside run `i` draw from a [`RunRng`]
//! seeded by:
//!
//!   seed = global_seed XOR (i * MIXING_CONSTANT)
//!
//! Every contender in a comparison gets a fresh `RunRng` for the same run
//! index, so two identical robots make identical choices, and running the
//! runs out of order (see the `parallel` feature of `mr-sim`) cannot change
//! any result.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RunRng ────────────────────────────────────────────────────────────────────

/// Per-run deterministic RNG handed to robots.
pub struct RunRng(SmallRng);

impl RunRng {
    /// Seed deterministically from the global seed and a run index.
    pub fn new(global_seed: u64, run: u64) -> Self {
        let seed = global_seed ^ run.wrapping_mul(MIXING_CONSTANT);
        RunRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice, uniformly by position.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG used to generate scenarios.
///
/// Used only from the single thread that drives a comparison.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
