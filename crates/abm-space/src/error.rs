//! Spatial-subsystem error type.

use thiserror::Error;

use abm_core::AgentId;

/// Errors produced by `abm-space`.
///
/// Coordinates are carried pre-formatted so one error type serves every
/// dimensionality.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpaceError {
    #[error("location {0} is outside the grid")]
    LocationInvalid(String),

    #[error("location {0} is already occupied")]
    LocationUnavailable(String),

    #[error("agent {0} not found in grid")]
    AgentNotFound(AgentId),

    #[error("agent {0} is already placed in the grid")]
    DuplicateAgent(AgentId),

    #[error("grid configuration error: {0}")]
    Config(String),
}

pub type SpaceResult<T> = Result<T, SpaceError>;
