//! `mr-graph` — road graph and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`graph`]   | `Graph` (CSR adjacency + label index), `GraphBuilder`   |
//! | [`router`]  | `Router` trait, `Route`, `BfsRouter`, `find_route`      |
//! | [`village`] | The canonical village map and its fixed mail route      |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                          |

pub mod error;
pub mod graph;
pub mod router;
pub mod village;


pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphBuilder};
pub use router::{BfsRouter, Route, Router, distances_from, find_route};
