//! The `Robot` trait — the extension point for delivery strategies.

use mr_core::RunRng;
use mr_world::WorldState;

use crate::{Decision, Memory, RobotContext, RobotResult};

/// Pluggable delivery strategy.
///
/// Each turn the runner calls [`decide`][Self::decide] with the current
/// world, the memory returned by the previous call, and a per-run RNG, then
/// moves the robot to `Decision::direction`.  Termination belongs to the
/// runner; a robot never signals "done".
///
/// # Thread safety
///
/// Comparisons may run many scenarios in parallel against the same robot
/// value, so implementations must be `Send + Sync`.  Per-run state belongs
/// in the memory, not in the robot.
///
/// # Example
///
/// ```rust,ignore
/// struct StayNearHome;
///
/// impl Robot for StayNearHome {
///     fn decide(&self, state: &WorldState, memory: Memory, ctx: &RobotContext<'_>, _rng: &mut RunRng)
///         -> RobotResult<Decision>
///     {
///         let home = ctx.graph.neighbors(state.place())[0];
///         Ok(Decision { direction: home, memory })
///     }
/// }
/// ```
pub trait Robot: Send + Sync {
    /// Choose the next move.
    fn decide(
        &self,
        state:  &WorldState,
        memory: Memory,
        ctx:    &RobotContext<'_>,
        rng:    &mut RunRng,
    ) -> RobotResult<Decision>;

    /// Memory to start a run with.  Default: empty.
    fn initial_memory(&self) -> Memory {
        Memory::new()
    }

    /// Short label used in logs and comparison reports.
    fn name(&self) -> &str {
        "robot"
    }
}
