//! Core error type.
//!
//! Higher crates keep their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `mr-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mr-core`.
pub type CoreResult<T> = Result<T, CoreError>;
