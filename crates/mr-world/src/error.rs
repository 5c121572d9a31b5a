use mr_core::LocationId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("cannot move from {from} to {to}: not adjacent")]
    NotAdjacent { from: LocationId, to: LocationId },

    #[error("location {0} not found in graph")]
    UnknownLocation(LocationId),

    #[error("scenario needs at least 2 locations, graph has {0}")]
    TooFewLocations(usize),
}

pub type WorldResult<T> = Result<T, WorldError>;
