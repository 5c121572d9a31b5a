//! The village map the mail robot works in.
//!
//! Fourteen two-way roads connect eleven places.  The fixed mail route is a
//! closed walk from the post office that passes every place at least once.

use mr_core::LocationId;

use crate::{Graph, GraphResult};

/// Where every generated scenario starts the robot.
pub const POST_OFFICE: &str = "Post Office";

pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",   "Alice's House-Cabin",
    "Alice's House-Post Office",   "Bob's House-Town Hall",
    "Daria's House-Ernie's House", "Daria's House-Town Hall",
    "Ernie's House-Grete's House", "Grete's House-Farm",
    "Grete's House-Shop",          "Marketplace-Farm",
    "Marketplace-Post Office",     "Marketplace-Shop",
    "Marketplace-Town Hall",       "Shop-Town Hall",
];

pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House", "Cabin", "Alice's House", "Bob's House",
    "Town Hall", "Daria's House", "Ernie's House",
    "Grete's House", "Shop", "Grete's House", "Farm",
    "Marketplace", "Post Office",
];

/// Build the village graph.
pub fn graph() -> GraphResult<Graph> {
    Graph::from_edges(ROADS)
}

/// Resolve [`MAIL_ROUTE`] against `graph`.
pub fn mail_route(graph: &Graph) -> GraphResult<Vec<LocationId>> {
    MAIL_ROUTE.iter().map(|label| graph.require(label)).collect()
}

/// Resolve [`POST_OFFICE`] against `graph`.
pub fn post_office(graph: &Graph) -> GraphResult<LocationId> {
    graph.require(POST_OFFICE)
}
