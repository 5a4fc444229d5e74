//! Two-phase scheduling: every `step` before any `advance`.
//!
//! ```text
//! order = snapshot (optionally shuffled)
//! pass 1: for id in order → step      (staged-capable only)
//! pass 2: for id in order → advance   (staged-capable only, same order)
//! ```
//!
//! An agent whose `step` failed under [`FailurePolicy::Isolate`] still gets
//! its `advance`; it decides for itself what committing a failed decision
//! means.  An agent removed during pass 1 is skipped in pass 2.

use tracing::debug;

use abm_agent::Context;
use abm_core::{SimRng, Step};

use crate::scheduler::{run_pass, Phase};
use crate::{FailurePolicy, ScheduleResult, Scheduler, StepReport};

#[derive(Debug, Clone, Default)]
pub struct StagedScheduler {
    steps:   Step,
    failure: FailurePolicy,
    /// `Some` shuffles the order each step; `None` keeps registration order.
    shuffle: Option<SimRng>,
}

impl StagedScheduler {
    /// Staged passes in registration order.
    pub fn sequential() -> Self {
        Self::default()
    }

    /// Staged passes in a seeded random order, reshuffled every step.
    pub fn random(seed: u64) -> Self {
        Self::with_rng(SimRng::new(seed))
    }

    pub fn with_rng(rng: SimRng) -> Self {
        Self { shuffle: Some(rng), ..Self::default() }
    }

    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure
    }

    /// Seed of the ordering stream, if the order is shuffled.
    pub fn seed(&self) -> Option<u64> {
        self.shuffle.as_ref().map(SimRng::seed)
    }
}

impl Scheduler for StagedScheduler {
    fn step<Ctx: Context>(&mut self, ctx: &mut Ctx) -> ScheduleResult<StepReport> {
        self.steps = self.steps.next();
        let mut order = ctx.population().ids();
        if let Some(rng) = self.shuffle.as_mut() {
            rng.shuffle(&mut order);
        }
        debug!(scheduler = self.name(), step = %self.steps, agents = order.len(), "step");

        let mut report = StepReport::new(self.steps);
        run_pass(ctx, &order, Phase::StagedStep, self.failure, &mut report)?;
        run_pass(ctx, &order, Phase::Advance, self.failure, &mut report)?;
        Ok(report)
    }

    fn step_count(&self) -> Step {
        self.steps
    }

    fn name(&self) -> &'static str {
        "staged"
    }
}
