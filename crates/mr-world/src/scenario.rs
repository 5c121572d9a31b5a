//! Seeded scenario generation.

use mr_core::{LocationId, SimRng};
use mr_graph::Graph;

use crate::{Parcel, WorldError, WorldResult, WorldState};

impl WorldState {
    /// Generate a scenario with `parcel_count` parcels and the robot at
    /// `origin`.
    ///
    /// Each parcel gets a uniformly random pickup location and a uniformly
    /// random destination that differs from it (redrawn until distinct).
    pub fn random(
        graph:        &Graph,
        origin:       LocationId,
        parcel_count: usize,
        rng:          &mut SimRng,
    ) -> WorldResult<WorldState> {
        let n = graph.node_count();
        if n < 2 {
            return Err(WorldError::TooFewLocations(n));
        }
        if !graph.contains(origin) {
            return Err(WorldError::UnknownLocation(origin));
        }

        let mut pick = || LocationId(rng.gen_range(0..n as u32));
        let parcels = (0..parcel_count)
            .map(|_| {
                let place = pick();
                let mut destination = pick();
                while destination == place {
                    destination = pick();
                }
                Parcel { place, destination }
            })
            .collect();

        Ok(WorldState { place: origin, parcels })
    }
}
