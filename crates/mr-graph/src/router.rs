//! Routing trait and default breadth-first implementation.
//!
//! # Pluggability
//!
//! Robots call routing through the [`Router`] trait, so a weighted or
//! heuristic search can be swapped in without touching the robots.  The
//! default [`BfsRouter`] finds a fewest-hops route.
//!
//! # Tie-breaking
//!
//! Neighbors are expanded in the graph's adjacency order and a location is
//! queued at most once.  Among several shortest routes, the one reached first
//! in that traversal is returned, so results are reproducible.

use std::collections::VecDeque;

use mr_core::LocationId;

use crate::{Graph, GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the stops to visit in order.
///
/// The starting location is not included; the destination is the last stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub stops: Vec<LocationId>,
}

impl Route {
    /// Number of hops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` if the source and destination are the same location.
    pub fn is_trivial(&self) -> bool {
        self.stops.is_empty()
    }

    /// The next location to move to.
    pub fn first(&self) -> Option<LocationId> {
        self.stops.first().copied()
    }

    pub fn destination(&self) -> Option<LocationId> {
        self.stops.last().copied()
    }

    pub fn into_stops(self) -> Vec<LocationId> {
        self.stops
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// Implementations must be `Send + Sync` so one router can be shared by the
/// runs of a parallel comparison.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` is an empty route, not an error.  An unreachable `to`
    /// yields [`GraphError::NoRoute`].
    fn route(&self, graph: &Graph, from: LocationId, to: LocationId) -> GraphResult<Route>;
}

/// Breadth-first, unweighted shortest-path search.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(&self, graph: &Graph, from: LocationId, to: LocationId) -> GraphResult<Route> {
        find_route(graph, from, to)
    }
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// Fewest-hops route from `from` to `to`.
///
/// Terminates on disconnected graphs: every location is queued at most once,
/// so an unreachable target exhausts the queue and returns `NoRoute`.
pub fn find_route(graph: &Graph, from: LocationId, to: LocationId) -> GraphResult<Route> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(GraphError::UnknownLocation(id));
        }
    }
    if from == to {
        return Ok(Route::default());
    }

    let n = graph.node_count();
    // prev[v] = location we stepped from to reach v.
    let mut prev   = vec![LocationId::INVALID; n];
    let mut queued = vec![false; n];
    queued[from.index()] = true;

    let mut work = VecDeque::from([from]);
    while let Some(at) = work.pop_front() {
        for &place in graph.neighbors(at) {
            if place == to {
                prev[to.index()] = at;
                return Ok(reconstruct(&prev, from, to));
            }
            if !queued[place.index()] {
                queued[place.index()] = true;
                prev[place.index()] = at;
                work.push_back(place);
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(prev: &[LocationId], from: LocationId, to: LocationId) -> Route {
    let mut stops = vec![to];
    let mut cur = prev[to.index()];
    while cur != from {
        stops.push(cur);
        cur = prev[cur.index()];
    }
    stops.reverse();
    Route { stops }
}

/// Hop distance from `from` to every location; `None` where unreachable.
///
/// Independent of [`find_route`]'s bookkeeping, so tests use it as the
/// reference for route lengths.
pub fn distances_from(graph: &Graph, from: LocationId) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.node_count()];
    if !graph.contains(from) {
        return dist;
    }
    dist[from.index()] = Some(0);
    let mut work = VecDeque::from([(from, 0usize)]);
    while let Some((at, d)) = work.pop_front() {
        for &next in graph.neighbors(at) {
            if dist[next.index()].is_none() {
                dist[next.index()] = Some(d + 1);
                work.push_back((next, d + 1));
            }
        }
    }
    dist
}
