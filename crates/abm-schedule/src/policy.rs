//! Scheduler selection as plain data.
//!
//! [`SchedulePolicy`] is what a configuration names; [`Schedule`] is the
//! scheduler it builds.  `Scheduler::step` is generic over the context, so
//! the trait cannot be boxed; `Schedule` dispatches over the three concrete
//! schedulers instead.

use abm_agent::Context;
use abm_core::{SimRng, Step};

use crate::{
    FailurePolicy, RandomScheduler, ScheduleResult, Scheduler, SequentialScheduler,
    StagedScheduler, StepReport,
};

/// Order of the two staged passes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StageOrder {
    #[default]
    Sequential,
    Random,
}

/// Which scheduler to build.
///
/// `seed: None` means draw one from OS entropy; the drawn seed is reported
/// by the built scheduler.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchedulePolicy {
    #[default]
    Sequential,
    Random { seed: Option<u64> },
    Staged { order: StageOrder, seed: Option<u64> },
}

/// A scheduler chosen at runtime.
#[derive(Debug, Clone)]
pub enum Schedule {
    Sequential(SequentialScheduler),
    Random(RandomScheduler),
    Staged(StagedScheduler),
}

impl Schedule {
    /// Build the scheduler `policy` names.
    ///
    /// A staged policy with [`StageOrder::Sequential`] never shuffles, so
    /// its `seed` is ignored and the built schedule reports no seed.
    /// `abm_model::ModelConfig::validate` rejects that combination.
    pub fn from_policy(policy: SchedulePolicy, failure: FailurePolicy) -> Self {
        match policy {
            SchedulePolicy::Sequential => {
                Schedule::Sequential(SequentialScheduler::new().with_failure_policy(failure))
            }
            SchedulePolicy::Random { seed } => Schedule::Random(
                RandomScheduler::with_rng(SimRng::from_seed_or_entropy(seed))
                    .with_failure_policy(failure),
            ),
            SchedulePolicy::Staged { order: StageOrder::Sequential, .. } => {
                Schedule::Staged(StagedScheduler::sequential().with_failure_policy(failure))
            }
            SchedulePolicy::Staged { order: StageOrder::Random, seed } => Schedule::Staged(
                StagedScheduler::with_rng(SimRng::from_seed_or_entropy(seed))
                    .with_failure_policy(failure),
            ),
        }
    }

    /// Seed of the ordering stream, for schedulers that shuffle.
    pub fn seed(&self) -> Option<u64> {
        match self {
            Schedule::Sequential(_) => None,
            Schedule::Random(s) => Some(s.seed()),
            Schedule::Staged(s) => s.seed(),
        }
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        match self {
            Schedule::Sequential(s) => s.failure_policy(),
            Schedule::Random(s) => s.failure_policy(),
            Schedule::Staged(s) => s.failure_policy(),
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule::Sequential(SequentialScheduler::new())
    }
}

impl From<SequentialScheduler> for Schedule {
    fn from(s: SequentialScheduler) -> Self {
        Schedule::Sequential(s)
    }
}

impl From<RandomScheduler> for Schedule {
    fn from(s: RandomScheduler) -> Self {
        Schedule::Random(s)
    }
}

impl From<StagedScheduler> for Schedule {
    fn from(s: StagedScheduler) -> Self {
        Schedule::Staged(s)
    }
}

impl Scheduler for Schedule {
    fn step<Ctx: Context>(&mut self, ctx: &mut Ctx) -> ScheduleResult<StepReport> {
        match self {
            Schedule::Sequential(s) => s.step(ctx),
            Schedule::Random(s) => s.step(ctx),
            Schedule::Staged(s) => s.step(ctx),
        }
    }

    fn step_count(&self) -> Step {
        match self {
            Schedule::Sequential(s) => s.step_count(),
            Schedule::Random(s) => s.step_count(),
            Schedule::Staged(s) => s.step_count(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Schedule::Sequential(s) => s.name(),
            Schedule::Random(s) => s.name(),
            Schedule::Staged(s) => s.name(),
        }
    }
}
