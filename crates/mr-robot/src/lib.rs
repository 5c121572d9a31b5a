//! `mr-robot` — robot decision trait and the stock robots.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`decision`] | `Decision`, `Memory`                                          |
//! | [`context`]  | `RobotContext<'a>` — read-only per-turn view (graph, router)  |
//! | [`model`]    | `Robot` trait                                                 |
//! | [`random`]   | `RandomRobot` — uniform random walk                           |
//! | [`route`]    | `RouteRobot` — loops a fixed route                            |
//! | [`goal`]     | `GoalRobot` — routes to the first parcel's next stop          |
//! | [`nearest`]  | `NearestParcelRobot` — routes to the closest parcel           |
//! | [`error`]    | `RobotError`, `RobotResult<T>`                                |
//!
//! # Memory threading
//!
//! A robot holds no per-run state.  Whatever it needs to remember between
//! turns goes into the returned [`Memory`], which the caller hands back on
//! the next call.  That keeps every robot `Send + Sync` and lets one robot
//! value drive many runs at once.

pub mod context;
pub mod decision;
pub mod error;
pub mod goal;
pub mod model;
pub mod nearest;
pub mod random;
pub mod route;


pub use context::RobotContext;
pub use decision::{Decision, Memory};
pub use error::{RobotError, RobotResult};
pub use goal::GoalRobot;
pub use model::Robot;
pub use nearest::NearestParcelRobot;
pub use random::RandomRobot;
pub use route::RouteRobot;
