use tracing::debug;

use abm_agent::Context;
use abm_core::Step;

use crate::scheduler::{run_pass, Phase};
use crate::{FailurePolicy, ScheduleResult, Scheduler, StepReport};

/// Invokes every agent once per step in population registration order.
#[derive(Debug, Clone, Default)]
pub struct SequentialScheduler {
    steps:   Step,
    failure: FailurePolicy,
}

impl SequentialScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure
    }
}

impl Scheduler for SequentialScheduler {
    fn step<Ctx: Context>(&mut self, ctx: &mut Ctx) -> ScheduleResult<StepReport> {
        self.steps = self.steps.next();
        let order = ctx.population().ids();
        debug!(scheduler = self.name(), step = %self.steps, agents = order.len(), "step");

        let mut report = StepReport::new(self.steps);
        run_pass(ctx, &order, Phase::Step, self.failure, &mut report)?;
        Ok(report)
    }

    fn step_count(&self) -> Step {
        self.steps
    }

    fn name(&self) -> &'static str {
        "sequential"
    }
}
