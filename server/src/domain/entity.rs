//! Shared entity contract and domain errors.

use thiserror::Error;

/// Anything persisted with its own row id
pub trait Entity: Sized + Send + Sync + Clone {
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    fn id(&self) -> Self::Id;
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by the domain and repository layers.
///
/// Messages are shown to API clients as-is, except `Internal`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
