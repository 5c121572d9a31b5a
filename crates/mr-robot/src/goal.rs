//! Goal-directed robot.

use mr_core::RunRng;
use mr_world::WorldState;

use crate::{Decision, Memory, Robot, RobotContext, RobotError, RobotResult};

/// Works through parcels in order.
///
/// With no plan in memory it looks at the first parcel: if the parcel is
/// elsewhere it routes there to pick it up, otherwise it routes to the
/// parcel's destination.  The plan is then followed one stop per turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalRobot;

impl Robot for GoalRobot {
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

        let parcel = state.parcels().first().ok_or(RobotError::NoParcels)?;
        let target = if parcel.place != state.place() {
            parcel.place
        } else {
            parcel.destination
        };
        let route = ctx.router.route(ctx.graph, state.place(), target)?;
        Decision::follow(route.into_stops())
    }

    fn name(&self) -> &str {
        "goal"
    }
}
