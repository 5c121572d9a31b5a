//! A single pending delivery.

use mr_core::LocationId;

/// A parcel waiting at `place` (or riding with the robot) until it reaches
/// `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub place:       LocationId,
    pub destination: LocationId,
}

impl Parcel {
    #[inline]
    pub fn new(place: LocationId, destination: LocationId) -> Self {
        Self { place, destination }
    }

    /// `true` once the parcel has reached its destination.
    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.place == self.destination
    }
}
