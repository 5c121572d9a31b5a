//! Fixed-route robot.

use mr_core::{LocationId, RunRng};
use mr_graph::{Graph, GraphResult, village};
use mr_world::WorldState;

use crate::{Decision, Memory, Robot, RobotContext, RobotError, RobotResult};

/// Walks a preset route, one stop per turn, starting over whenever the
/// remaining memory runs out.
///
/// The route is followed blindly: it is neither checked against the graph nor
/// against the robot's position, so a route that does not start next to the
/// robot produces moves the world ignores.
#[derive(Debug, Clone)]
pub struct RouteRobot {
    route: Vec<LocationId>,
}

impl RouteRobot {
    /// Build from a non-empty route.
    pub fn new(route: Vec<LocationId>) -> RobotResult<Self> {
        if route.is_empty() {
            return Err(RobotError::EmptyRoute);
        }
        Ok(Self { route })
    }

    /// The village mail route, starting and ending at the post office.
    pub fn mail_route(graph: &Graph) -> GraphResult<Self> {
        let route = village::mail_route(graph)?;
        Ok(Self { route })
    }

    pub fn route(&self) -> &[LocationId] {
        &self.route
    }
}

impl Robot for RouteRobot {
    fn decide(
        &self,
        _state: &WorldState,
        memory: Memory,
        _ctx:   &RobotContext<'_>,
        _rng:   &mut RunRng,
    ) -> RobotResult<Decision> {
        if memory.is_empty() {
            return Decision::follow(self.route.clone());
        }
        Decision::follow(memory)
    }

    fn name(&self) -> &str {
        "route"
    }
}
