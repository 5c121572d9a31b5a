//! The single-run turn loop.

use mr_core::{RunRng, Turn};
use mr_graph::{BfsRouter, Graph, Router};
use mr_robot::{Memory, Robot, RobotContext};
use mr_world::WorldState;

use crate::{NoopObserver, SimError, SimResult, TurnEvent, TurnObserver};

/// How a finished run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Completed decide + move cycles.
    pub turns: u64,
    pub final_state: WorldState,
}

/// Drives one robot against one scenario until every parcel is delivered.
///
/// The graph and router are shared read-only; the runner itself holds no
/// per-run state, so one runner can serve any number of runs.
///
/// Without a turn limit a robot that never delivers keeps the loop going
/// forever.  Set [`max_turns`](Self::max_turns) when running untrusted robots.
#[derive(Clone, Copy)]
pub struct Runner<'a> {
    graph:     &'a Graph,
    router:    &'a dyn Router,
    max_turns: Option<u64>,
}

impl<'a> Runner<'a> {
    pub fn new(graph: &'a Graph, router: &'a dyn Router) -> Self {
        Self { graph, router, max_turns: None }
    }

    /// Fail a run with [`SimError::TurnLimit`] once it reaches `limit` turns
    /// with parcels remaining.
    pub fn max_turns(mut self, limit: Option<u64>) -> Self {
        self.max_turns = limit;
        self
    }

    /// Run `robot` from `state` with `memory` until the state has no parcels.
    pub fn run<O: TurnObserver + ?Sized>(
        &self,
        state:    WorldState,
        robot:    &dyn Robot,
        memory:   Memory,
        rng:      &mut RunRng,
        observer: &mut O,
    ) -> SimResult<RunOutcome> {
        observer.on_run_start(robot.name(), &state);

        let mut state  = state;
        let mut memory = memory;
        let mut turn   = Turn::ZERO;

        while !state.is_done() {
            if let Some(limit) = self.max_turns.filter(|&limit| turn.0 >= limit) {
                tracing::warn!(robot = robot.name(), limit, "turn limit reached");
                return Err(SimError::TurnLimit { robot: robot.name().to_owned(), limit });
            }

            let ctx = RobotContext::new(turn, self.graph, self.router);
            let decision = robot
                .decide(&state, memory, &ctx, rng)
                .map_err(|source| SimError::Robot {
                    robot: robot.name().to_owned(),
                    turn,
                    source,
                })?;

            let from  = state.place();
            let moved = self.graph.is_adjacent(from, decision.direction);
            state  = state.move_to(self.graph, decision.direction);
            memory = decision.memory;

            observer.on_turn(&TurnEvent {
                turn,
                from,
                direction: decision.direction,
                moved,
                state: &state,
            });
            turn = turn.next();
        }

        observer.on_run_end(turn.0, &state);
        Ok(RunOutcome { turns: turn.0, final_state: state })
    }
}

/// Turns `robot` needs to clear `state`, using breadth-first routing and no
/// observer or turn limit.
pub fn run_robot(
    graph:  &Graph,
    state:  WorldState,
    robot:  &dyn Robot,
    memory: Memory,
    rng:    &mut RunRng,
) -> SimResult<u64> {
    Runner::new(graph, &BfsRouter)
        .run(state, robot, memory, rng, &mut NoopObserver)
        .map(|outcome| outcome.turns)
}
