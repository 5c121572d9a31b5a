use mr_core::{CoreError, Turn};
use mr_robot::RobotError;
use mr_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("scenario error: {0}")]
    World(#[from] WorldError),

    #[error("robot {robot:?} failed on {turn}: {source}")]
    Robot {
        robot:  String,
        turn:   Turn,
        source: RobotError,
    },

    #[error("robot {robot:?} still had parcels after {limit} turns")]
    TurnLimit { robot: String, limit: u64 },

    #[error("comparison needs at least one contender")]
    NoContenders,
}

pub type SimResult<T> = Result<T, SimError>;
