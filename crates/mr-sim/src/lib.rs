//! `mr-sim` — turn loop and robot comparison for the mail-robot simulation.
//!
//! # Turn loop
//!
//! ```text
//! while state has parcels:
//!   ① Decide  — robot.decide(state, memory) → (direction, memory')
//!   ② Move    — state' = state.move_to(direction)
//!   ③ Observe — observer.on_turn(turn, from, direction, state')
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs comparison scenarios on Rayon's thread pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mr_core::SimConfig;
//! use mr_graph::village;
//! use mr_robot::{GoalRobot, RouteRobot};
//! use mr_sim::{Contender, compare_robots};
//!
//! let graph = village::graph()?;
//! let origin = village::post_office(&graph)?;
//! let route = RouteRobot::mail_route(&graph)?;
//! let result = compare_robots(
//!     &graph,
//!     origin,
//!     &[Contender::new(&route), Contender::new(&GoalRobot)],
//!     &SimConfig::default(),
//! )?;
//! println!("{:?}", result.winner());
//! ```

pub mod compare;
pub mod error;
pub mod observer;
pub mod runner;

#[cfg(test)]
mod tests;

pub use compare::{Comparison, Contender, Score, compare_pair, compare_robots};
pub use error::{SimError, SimResult};
pub use observer::{Narrator, NoopObserver, TraceObserver, TurnEvent, TurnObserver};
pub use runner::{RunOutcome, Runner, run_robot};
