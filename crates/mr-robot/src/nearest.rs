//! Nearest-parcel robot.

use mr_core::RunRng;
use mr_world::WorldState;

use crate::{Decision, Memory, Robot, RobotContext, RobotError, RobotResult};

/// Like [`GoalRobot`](crate::GoalRobot), but instead of always serving the
/// first parcel it plans a route for every parcel and takes the shortest.
///
/// Pickups beat deliveries of the same length, since picking up first
/// tends to let later deliveries share a trip.  On a full tie the parcel
/// listed last wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestParcelRobot;

/// Twice the route score, kept integral: shorter is better, and a pickup is
/// worth half a hop.
fn score(hops: usize, pickup: bool) -> i64 {
    i64::from(pickup) - 2 * hops as i64
}

impl Robot for NearestParcelRobot {
    fn decide(
        &self,
        state:  &WorldState,
        memory: Memory,
        ctx:    &RobotContext<'_>,
        _rng:   &mut RunRng,
    ) -> RobotResult<Decision> {
        if !memory.is_empty() {
            return Decision::follow(memory);
        }

        let place = state.place();
        let mut best: Option<(i64, Memory)> = None;
        for parcel in state.parcels() {
            let pickup = parcel.place != place;
            let target = if pickup { parcel.place } else { parcel.destination };
            let stops = ctx.router.route(ctx.graph, place, target)?.into_stops();
            let s = score(stops.len(), pickup);
            if best.as_ref().is_none_or(|(b, _)| s >= *b) {
                best = Some((s, stops));
            }
        }

        let (_, plan) = best.ok_or(RobotError::NoParcels)?;
        Decision::follow(plan)
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
