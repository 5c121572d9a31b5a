use mr_core::LocationId;
use mr_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RobotError {
    #[error("location {0} has no neighbors to walk to")]
    NoNeighbors(LocationId),

    #[error("planned route is empty")]
    EmptyRoute,

    #[error("no parcels left to plan for")]
    NoParcels,

    #[error("routing failed: {0}")]
    Routing(#[from] GraphError),
}

pub type RobotResult<T> = Result<T, RobotError>;
