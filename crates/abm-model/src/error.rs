use thiserror::Error;

use abm_agent::PopulationError;
use abm_schedule::ScheduleError;
use abm_space::SpaceError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("model configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Space(#[from] SpaceError),

    #[error(transparent)]
    Population(#[from] PopulationError),
}

pub type ModelResult<T> = Result<T, ModelError>;
