//! Read-only simulation view passed to every robot decision.

use mr_core::Turn;
use mr_graph::{Graph, Router};

/// Everything a robot may consult besides the world state and its memory.
///
/// Built by the runner once per turn; all borrows live for that turn only.
pub struct RobotContext<'a> {
    /// Index of the turn being decided.
    pub turn: Turn,

    /// The road graph.
    pub graph: &'a Graph,

    /// Shortest-path service for planning robots.
    pub router: &'a dyn Router,
}

impl<'a> RobotContext<'a> {
    #[inline]
    pub fn new(turn: Turn, graph: &'a Graph, router: &'a dyn Router) -> Self {
        Self { turn, graph, router }
    }
}
