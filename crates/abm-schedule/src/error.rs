use thiserror::Error;

use abm_agent::AgentError;
use abm_core::{AgentId, Step};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// An agent callback failed under [`FailurePolicy::Abort`][crate::FailurePolicy::Abort].
    #[error("agent {agent} failed during step {step}: {source}")]
    AgentFailed {
        agent:  AgentId,
        step:   Step,
        source: AgentError,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
