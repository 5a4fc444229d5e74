//! The `Scheduler` trait and the per-step machinery every policy shares.

use tracing::{trace, warn};

use abm_agent::{Agent, AgentError, AgentResult, Context};
use abm_core::{AgentId, Step};

use crate::{ScheduleError, ScheduleResult};

/// What a scheduler does when an agent callback returns `Err`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailurePolicy {
    /// Log the failure, record it in the [`StepReport`] and carry on with
    /// the next agent.
    #[default]
    Isolate,
    /// Stop the step at the first failure and return
    /// [`ScheduleError::AgentFailed`].  Agents already invoked keep their
    /// effects; the step still counts.
    Abort,
}

/// Outcome of one scheduler step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// The step this report describes (the counter value after increment).
    pub step:     Step,
    /// Callbacks invoked, `step` and `advance` counted separately.
    pub invoked:  usize,
    /// Snapshot entries skipped: removed mid-step, already borrowed, or
    /// (staged) lacking the two-phase capability.
    pub skipped:  usize,
    /// Isolated failures, in the order they occurred.
    pub failures: Vec<(AgentId, AgentError)>,
}

impl StepReport {
    pub(crate) fn new(step: Step) -> Self {
        Self { step, ..Self::default() }
    }

    /// `true` if no callback failed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Drives agents through one step at a time.
///
/// Implementations decide the order; they share snapshot, skip and failure
/// handling.  Every call to [`step`](Self::step) increments the step count,
/// whether or not the step succeeds.
pub trait Scheduler {
    /// Advance the simulation by one step.
    fn step<Ctx: Context>(&mut self, ctx: &mut Ctx) -> ScheduleResult<StepReport>;

    /// Steps taken so far.
    fn step_count(&self) -> Step;

    /// Short label used in logs.
    fn name(&self) -> &'static str;
}

/// Which callback a pass invokes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Phase {
    /// `Agent::step` on every agent.
    Step,
    /// `Agent::step`, staged-capable agents only.
    StagedStep,
    /// `StagedAgent::advance`, staged-capable agents only.
    Advance,
}

/// Invoke `phase` on each id of `order` in turn.
///
/// Ids whose agent has left the population are skipped, as are agents
/// currently borrowed elsewhere.  Failures are handled per `failure`.
pub(crate) fn run_pass<Ctx: Context>(
    ctx:     &mut Ctx,
    order:   &[AgentId],
    phase:   Phase,
    failure: FailurePolicy,
    report:  &mut StepReport,
) -> ScheduleResult<()> {
    for &id in order {
        let Some(cell) = ctx.population().lookup(id) else {
            trace!(agent = %id, step = %report.step, "agent removed before its turn; skipped");
            report.skipped += 1;
            continue;
        };
        let Ok(mut agent) = cell.try_borrow_mut() else {
            trace!(agent = %id, step = %report.step, "agent already borrowed; skipped");
            report.skipped += 1;
            continue;
        };

        let result: Option<AgentResult<()>> = match phase {
            Phase::Step => Some(agent.step(ctx)),
            Phase::StagedStep => {
                if agent.as_staged().is_some() { Some(agent.step(ctx)) } else { None }
            }
            Phase::Advance => agent.as_staged().map(|staged| staged.advance(ctx)),
        };
        drop(agent);

        let Some(result) = result else {
            trace!(agent = %id, step = %report.step, ?phase, "agent not staged-capable; skipped");
            report.skipped += 1;
            continue;
        };
        report.invoked += 1;

        if let Err(source) = result {
            match failure {
                FailurePolicy::Isolate => {
                    warn!(agent = %id, step = %report.step, ?phase, error = %source, "agent callback failed");
                    report.failures.push((id, source));
                }
                FailurePolicy::Abort => {
                    return Err(ScheduleError::AgentFailed { agent: id, step: report.step, source });
                }
            }
        }
    }
    Ok(())
}
