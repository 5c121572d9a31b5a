//! `mr-core` — foundational types for the mail-robot simulation.
//!
//! Every other `mr-*` crate depends on this one.  It has no `mr-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `LocationId`                                   |
//! | [`turn`]   | `Turn`, `SimConfig`                            |
//! | [`rng`]    | `RunRng` (per-run), `SimRng` (global)          |
//! | [`error`]  | `CoreError`, `CoreResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod turn;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::LocationId;
pub use rng::{RunRng, SimRng};
pub use turn::{SimConfig, Turn};
