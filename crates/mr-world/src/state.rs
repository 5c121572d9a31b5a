//! The immutable world snapshot.

use mr_core::LocationId;
use mr_graph::Graph;

use crate::{Parcel, WorldError, WorldResult};

/// Robot position plus the parcels still in play.
///
/// `WorldState` is a value: transitions return a new state and never mutate
/// `self`.  No parcel in a `WorldState` is ever at its destination, including
/// one read back through serde.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "StateFields")
)]
pub struct WorldState {
    pub(crate) place:   LocationId,
    pub(crate) parcels: Vec<Parcel>,
}

/// Wire shape of [`WorldState`]; deserialization goes through
/// [`WorldState::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StateFields {
    place:   LocationId,
    parcels: Vec<Parcel>,
}

#[cfg(feature = "serde")]
impl From<StateFields> for WorldState {
    fn from(fields: StateFields) -> Self {
        WorldState::new(fields.place, fields.parcels)
    }
}

impl WorldState {
    /// Build a state, dropping any parcel that is already delivered.
    pub fn new(place: LocationId, parcels: Vec<Parcel>) -> Self {
        let parcels = parcels.into_iter().filter(|p| !p.is_delivered()).collect();
        Self { place, parcels }
    }

    /// Where the robot is.
    #[inline]
    pub fn place(&self) -> LocationId {
        self.place
    }

    /// Undelivered parcels, in generation order.
    #[inline]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    #[inline]
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// `true` when every parcel has been delivered.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels lying at (or carried by the robot at) `place`.
    pub fn parcels_at(&self, place: LocationId) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(move |p| p.place == place)
    }

    /// Move the robot one hop to `destination`.
    ///
    /// A `destination` that is not adjacent to the robot leaves the world as
    /// it was: the returned state equals `self`.  Use
    /// [`try_move`](Self::try_move) to have that reported instead.
    pub fn move_to(&self, graph: &Graph, destination: LocationId) -> WorldState {
        self.try_move(graph, destination)
            .unwrap_or_else(|_| self.clone())
    }

    /// Move the robot one hop to `destination`, or report why it cannot.
    pub fn try_move(&self, graph: &Graph, destination: LocationId) -> WorldResult<WorldState> {
        if !graph.is_adjacent(self.place, destination) {
            return Err(WorldError::NotAdjacent { from: self.place, to: destination });
        }
        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    Parcel { place: destination, ..*p }
                } else {
                    *p
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();
        Ok(WorldState { place: destination, parcels })
    }
}
