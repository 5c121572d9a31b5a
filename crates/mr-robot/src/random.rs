//! Uniform random walk.

use mr_core::RunRng;
use mr_world::WorldState;

use crate::{Decision, Memory, Robot, RobotContext, RobotError, RobotResult};

/// Moves to a uniformly chosen entry of the current location's adjacency
/// list.  A road declared twice is twice as likely to be taken.
///
/// Ignores memory and always returns it empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomRobot;

impl Robot for RandomRobot {
    fn decide(
        &self,
        state:   &WorldState,
        _memory: Memory,
        ctx:     &RobotContext<'_>,
        rng:     &mut RunRng,
    ) -> RobotResult<Decision> {
        let place = state.place();
        let direction = *rng
            .choose(ctx.graph.neighbors(place))
            .ok_or(RobotError::NoNeighbors(place))?;
        Ok(Decision { direction, memory: Memory::new() })
    }

    fn name(&self) -> &str {
        "random"
    }
}
