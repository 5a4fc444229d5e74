//! Fluent builder for constructing a [`Model`].

use tracing::debug;

use abm_agent::Agent;
use abm_core::SimRng;
use abm_schedule::{FailurePolicy, Schedule, SchedulePolicy, Scheduler, StageOrder};
use abm_space::Grid;

use crate::{Model, ModelError, ModelResult, World};

/// Offset of the scheduler's stream derived from the world seed.
const SCHEDULE_STREAM: u64 = 1;

/// Run-level configuration.
///
/// `seed` seeds the world's behavior RNG.  A shuffling schedule policy
/// without its own seed derives one from it, so a single seed reproduces
/// the whole run.  `seed: None` draws from OS entropy; the drawn seed is
/// reported by [`Model::world`]`.rng.seed()`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    pub seed:     Option<u64>,
    pub schedule: SchedulePolicy,
    pub failure:  FailurePolicy,
}

impl ModelConfig {
    /// Defaults with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed), ..Self::default() }
    }

    pub fn schedule(mut self, schedule: SchedulePolicy) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn failure(mut self, failure: FailurePolicy) -> Self {
        self.failure = failure;
        self
    }

    /// Reject seeds given to a schedule that never shuffles.
    pub fn validate(&self) -> ModelResult<()> {
        if let SchedulePolicy::Staged { order: StageOrder::Sequential, seed: Some(_) } = self.schedule {
            return Err(ModelError::Config(
                "staged schedule with sequential order takes no seed".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`Model<N, A, S>`].
///
/// # Required inputs
///
/// - [`Grid<N>`] — the spatial domain.
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                  |
/// |-----------------|------------------------------------------|
/// | `.config(c)`    | `ModelConfig::default()` (sequential, entropy seed, isolate) |
/// | `.state(s)`     | `()`                                     |
///
/// Agents are added after building with
/// [`World::spawn`] on [`Model::world_mut`].
pub struct ModelBuilder<const N: usize, A, S = ()> {
    grid:   Grid<N>,
    config: ModelConfig,
    state:  S,
    _agent: std::marker::PhantomData<fn() -> A>,
}

impl<const N: usize, A> ModelBuilder<N, A, ()> {
    pub fn new(grid: Grid<N>) -> Self {
        Self {
            grid,
            config: ModelConfig::default(),
            state:  (),
            _agent: std::marker::PhantomData,
        }
    }
}

impl<const N: usize, A, S> ModelBuilder<N, A, S> {
    pub fn config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach model-level state reachable from callbacks as `world.state`.
    pub fn state<T>(self, state: T) -> ModelBuilder<N, A, T> {
        ModelBuilder {
            grid:   self.grid,
            config: self.config,
            state,
            _agent: std::marker::PhantomData,
        }
    }

    /// Validate the configuration, seed the RNGs and return a ready model.
    pub fn build(self) -> ModelResult<Model<N, A, S>>
    where
        A: Agent<World<N, A, S>>,
    {
        self.config.validate()?;

        let mut rng = SimRng::from_seed_or_entropy(self.config.seed);
        let schedule_seed = rng.child(SCHEDULE_STREAM).seed();
        let policy = match self.config.schedule {
            SchedulePolicy::Random { seed: None } => SchedulePolicy::Random { seed: Some(schedule_seed) },
            SchedulePolicy::Staged { order: StageOrder::Random, seed: None } => {
                SchedulePolicy::Staged { order: StageOrder::Random, seed: Some(schedule_seed) }
            }
            explicit => explicit,
        };
        let schedule = Schedule::from_policy(policy, self.config.failure);

        debug!(
            seed          = rng.seed(),
            scheduler     = schedule.name(),
            schedule_seed = ?schedule.seed(),
            failure       = ?self.config.failure,
            "model built"
        );
        Ok(Model::new(World::new(self.grid, rng, self.state), schedule))
    }
}
