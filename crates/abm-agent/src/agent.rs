//! Agent capability traits, the main extension point for host code.

use abm_core::AgentId;

use crate::{AgentResult, Population};

/// Anything that carries a stable [`AgentId`].
///
/// Split out of [`Agent`] so that [`Population`] can read an agent's id
/// without knowing which context the agent runs in.
pub trait Identity {
    /// The id this agent was created with.  Must never change.
    fn id(&self) -> AgentId;
}

/// Single-phase agent behavior.
///
/// `Ctx` is whatever the host's model hands to callbacks, typically
/// `abm_model::World`.  Through it the agent reads and mutates the grid and
/// population; every change is visible to agents invoked later in the same
/// step.
///
/// # Example
///
/// ```rust,ignore
/// struct Walker { id: AgentId }
///
/// impl Identity for Walker {
///     fn id(&self) -> AgentId { self.id }
/// }
///
/// impl Agent<World<1, Walker>> for Walker {
///     fn step(&mut self, ctx: &mut World<1, Walker>) -> AgentResult<()> {
///         let here = ctx.grid.location_of(self.id)?;
///         ctx.grid.move_agent(self.id, here.offset([1]))?;
///         Ok(())
///     }
/// }
/// ```
pub trait Agent<Ctx>: Identity {
    /// Execute one time step.
    ///
    /// An `Err` aborts this agent's turn only; what happens to the rest of
    /// the step is the scheduler's failure policy.
    fn step(&mut self, ctx: &mut Ctx) -> AgentResult<()>;

    /// Two-phase capability.  Agents that implement [`StagedAgent`] return
    /// `Some(self)`; the staged scheduler skips agents returning `None`.
    fn as_staged(&mut self) -> Option<&mut dyn StagedAgent<Ctx>> {
        None
    }
}

/// Agents that split a tick into `step` (observe, decide) and `advance`
/// (commit).
///
/// Under the staged scheduler every agent's `step` runs before any agent's
/// `advance`, so decisions taken in `step` are all based on the same
/// pre-tick state.
pub trait StagedAgent<Ctx>: Agent<Ctx> {
    /// Commit the decision taken in [`Agent::step`].
    fn advance(&mut self, ctx: &mut Ctx) -> AgentResult<()>;
}

/// A callback context that exposes the population schedulers draw from.
pub trait Context: Sized {
    /// The agent type stored in the population.
    type Agent: Agent<Self>;

    fn population(&self) -> &Population<Self::Agent>;
}
