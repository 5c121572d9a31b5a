//! Graph-subsystem error type.

use thiserror::Error;

use mr_core::LocationId;

/// Errors produced by `mr-graph`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("malformed edge {0:?}: expected \"A-B\"")]
    MalformedEdge(String),

    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },

    #[error("location {0} not found in graph")]
    UnknownLocation(LocationId),

    #[error("no location labelled {0:?}")]
    UnknownLabel(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
