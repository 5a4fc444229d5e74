//! The `Model` struct and its step loop.

use tracing::debug;

use abm_agent::Agent;
use abm_core::Step;
use abm_schedule::{Schedule, Scheduler, StepReport};

use crate::{ModelObserver, ModelResult, NoopObserver, World};

/// A world plus the scheduler that drives it.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder], or directly with
/// [`Model::new`] when the world and schedule are already built.
pub struct Model<const N: usize, A, S = ()> {
    world:    World<N, A, S>,
    schedule: Schedule,
}

impl<const N: usize, A, S> Model<N, A, S>
where
    A: Agent<World<N, A, S>>,
{
    pub fn new(world: World<N, A, S>, schedule: Schedule) -> Self {
        Self { world, schedule }
    }

    pub fn world(&self) -> &World<N, A, S> {
        &self.world
    }

    /// Mutable world access between steps, e.g. to spawn initial agents.
    pub fn world_mut(&mut self) -> &mut World<N, A, S> {
        &mut self.world
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Steps taken so far, failed ones included.
    pub fn step_count(&self) -> Step {
        self.schedule.step_count()
    }

    /// Advance exactly one step.
    ///
    /// Fails only under [`FailurePolicy::Abort`][abm_schedule::FailurePolicy::Abort];
    /// isolated failures are in the returned report.
    pub fn step(&mut self) -> ModelResult<StepReport> {
        Ok(self.schedule.step(&mut self.world)?)
    }

    /// Run `n` steps without observation.
    pub fn run(&mut self, n: u64) -> ModelResult<()> {
        self.run_observed(n, &mut NoopObserver)
    }

    /// Run `n` steps, calling `observer` around each.
    ///
    /// Stops at the first failed step and returns its error; `on_run_end`
    /// is then not called.
    pub fn run_observed<O>(&mut self, n: u64, observer: &mut O) -> ModelResult<()>
    where
        O: ModelObserver<World<N, A, S>>,
    {
        debug!(
            steps     = n,
            scheduler = self.schedule.name(),
            agents    = self.world.agent_count(),
            from      = %self.step_count(),
            "run"
        );
        for _ in 0..n {
            observer.on_step_start(self.step_count().next());
            let report = self.step()?;
            observer.on_step_end(&report, &self.world);
        }
        observer.on_run_end(self.step_count(), &self.world);
        Ok(())
    }

    /// Consume the model, keeping the world.
    pub fn into_world(self) -> World<N, A, S> {
        self.world
    }
}
