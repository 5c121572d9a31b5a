//! Turn observers for narration, logging, and data collection.

use mr_core::{LocationId, Turn};
use mr_graph::Graph;
use mr_world::WorldState;

/// One completed turn: where the robot was, where it asked to go, and the
/// world that resulted.
#[derive(Debug, Clone, Copy)]
pub struct TurnEvent<'a> {
    pub turn:      Turn,
    pub from:      LocationId,
    pub direction: LocationId,
    /// `false` when `direction` was not adjacent and the move was ignored.
    pub moved:     bool,
    pub state:     &'a WorldState,
}

/// Callbacks invoked by [`Runner::run`][crate::Runner::run].
///
/// All methods default to no-ops so implementors only override what they
/// need.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// struct Deliveries { before: usize, count: usize }
///
/// impl TurnObserver for Deliveries {
///     fn on_turn(&mut self, event: &TurnEvent<'_>) {
///         self.count += self.before - event.state.parcel_count();
///         self.before = event.state.parcel_count();
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called once before the first turn.
    fn on_run_start(&mut self, _robot: &str, _state: &WorldState) {}

    /// Called after every move.
    fn on_turn(&mut self, _event: &TurnEvent<'_>) {}

    /// Called once when every parcel is delivered.
    fn on_run_end(&mut self, _turns: u64, _state: &WorldState) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}

/// Emits one `tracing` debug event per turn.
pub struct TraceObserver;

impl TurnObserver for TraceObserver {
    fn on_run_start(&mut self, robot: &str, state: &WorldState) {
        tracing::debug!(robot, parcels = state.parcel_count(), "run started");
    }

    fn on_turn(&mut self, event: &TurnEvent<'_>) {
        tracing::debug!(
            turn = event.turn.0,
            from = event.from.0,
            direction = event.direction.0,
            moved = event.moved,
            parcels = event.state.parcel_count(),
            "turn",
        );
    }

    fn on_run_end(&mut self, turns: u64, _state: &WorldState) {
        tracing::debug!(turns, "run finished");
    }
}

/// Collects a human-readable account of a run using location labels.
pub struct Narrator<'g> {
    graph: &'g Graph,
    lines: Vec<String>,
}

impl<'g> Narrator<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph, lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl TurnObserver for Narrator<'_> {
    fn on_turn(&mut self, event: &TurnEvent<'_>) {
        let to = self.graph.name(event.direction);
        let line = if event.moved {
            format!("Moved to {to}")
        } else {
            format!("Stayed at {} (no road to {to})", self.graph.name(event.from))
        };
        self.lines.push(line);
    }

    fn on_run_end(&mut self, turns: u64, _state: &WorldState) {
        self.lines.push(format!("Done in {turns} turns"));
    }
}
