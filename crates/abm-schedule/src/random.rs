use tracing::debug;

use abm_agent::Context;
use abm_core::{SimRng, Step};

use crate::scheduler::{run_pass, Phase};
use crate::{FailurePolicy, ScheduleResult, Scheduler, StepReport};

/// Invokes every agent once per step in a fresh random order.
///
/// The order is a shuffle of the id snapshot drawn from the scheduler's own
/// [`SimRng`]; two schedulers built with the same seed over the same
/// population produce the same sequence of orders.
#[derive(Debug, Clone)]
pub struct RandomScheduler {
    steps:   Step,
    failure: FailurePolicy,
    rng:     SimRng,
}

impl RandomScheduler {
    /// Seeded scheduler.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(SimRng::new(seed))
    }

    /// Scheduler seeded from OS entropy.  The seed actually used is still
    /// available from [`seed`](Self::seed) for replay.
    pub fn from_entropy() -> Self {
        Self::with_rng(SimRng::from_entropy())
    }

    pub fn with_rng(rng: SimRng) -> Self {
        Self { steps: Step::ZERO, failure: FailurePolicy::default(), rng }
    }

    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure
    }

    /// Seed of the ordering stream.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Scheduler for RandomScheduler {
    fn step<Ctx: Context>(&mut self, ctx: &mut Ctx) -> ScheduleResult<StepReport> {
        self.steps = self.steps.next();
        let mut order = ctx.population().ids();
        self.rng.shuffle(&mut order);
        debug!(scheduler = self.name(), step = %self.steps, agents = order.len(), "step");

        let mut report = StepReport::new(self.steps);
        run_pass(ctx, &order, Phase::Step, self.failure, &mut report)?;
        Ok(report)
    }

    fn step_count(&self) -> Step {
        self.steps
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
