use thiserror::Error;

use abm_core::AgentId;
use abm_space::SpaceError;

/// Errors produced by [`Population`][crate::Population].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PopulationError {
    #[error("agent {0} is already registered")]
    DuplicateAgent(AgentId),

    #[error("agent {0} not found in population")]
    AgentNotFound(AgentId),
}

pub type PopulationResult<T> = Result<T, PopulationError>;

/// Failure reported by an agent callback.
///
/// Grid and population errors convert with `?`, so a behavior can call
/// `ctx.grid.move_agent(..)?` directly.  Model-specific failures go in
/// [`AgentError::Behavior`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AgentError {
    #[error(transparent)]
    Space(#[from] SpaceError),

    #[error(transparent)]
    Population(#[from] PopulationError),

    #[error("behavior error: {0}")]
    Behavior(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
