//! Strongly typed location handle.
//!
//! Labels such as `"Post Office"` are interned by the graph; everything past
//! graph construction passes `LocationId`s around, which are `Copy + Ord +
//! Hash` and index straight into the graph's per-vertex arrays.

use std::fmt;

/// Index of a location (graph vertex), assigned in first-appearance order
/// while the edge list is scanned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u32);

impl LocationId {
    /// Sentinel for "no location", used to fill predecessor tables.
    pub const INVALID: LocationId = LocationId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
