//! `mr-world` — the state the robot acts on.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`parcel`]   | `Parcel` — one pending delivery                           |
//! | [`state`]    | `WorldState` — robot position + parcels, value semantics  |
//! | [`scenario`] | `WorldState::random` — seeded scenario generation         |
//! | [`error`]    | `WorldError`, `WorldResult<T>`                            |
//!
//! # Movement model
//!
//! A move is a single hop along a road.  Parcels lying where the robot stood
//! travel with it; a parcel that reaches its destination is dropped from the
//! state in the same move.  Every move builds a new `WorldState` and leaves
//! the old one untouched.

pub mod error;
pub mod parcel;
pub mod scenario;
pub mod state;


pub use error::{WorldError, WorldResult};
pub use parcel::Parcel;
pub use state::WorldState;
