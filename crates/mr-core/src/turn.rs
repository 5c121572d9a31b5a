//! Turn counter and run configuration.
//!
//! A turn is one decide + move cycle.  Turns are counted from zero at the
//! start of each simulation run; there is no wall-clock mapping.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Turn ──────────────────────────────────────────────────────────────────────

/// Index of a turn within one simulation run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u64);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }
}

impl std::ops::Add<u64> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u64) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Configuration for a robot comparison.
///
/// Built by the application (the demo binary maps CLI flags onto it) and
/// passed to `mr_sim::compare_robots`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Number of random scenarios each contender is run against.
    pub runs: usize,

    /// Parcels per generated scenario.
    pub parcels: usize,

    /// Abort a single run after this many turns.  `None` runs until every
    /// parcel is delivered, however long that takes.
    pub max_turns: Option<u64>,

    /// Worker thread count for the `parallel` feature.  `None` uses all
    /// logical cores.  Ignored by the sequential path.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    /// Reject configurations that cannot produce an average.
    pub fn validate(&self) -> CoreResult<()> {
        if self.runs == 0 {
            return Err(CoreError::Config("runs must be at least 1".into()));
        }
        if self.max_turns == Some(0) {
            return Err(CoreError::Config("max_turns must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:        42,
            runs:        100,
            parcels:     5,
            max_turns:   None,
            num_threads: None,
        }
    }
}
