//! The context object agent callbacks receive.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use abm_agent::{Agent, Context, Identity, Population};
use abm_core::{AgentId, IdGenerator, SimRng};
use abm_space::{Coord, Grid};

use crate::{ModelError, ModelResult};

/// Everything an agent can see and change during a step.
///
/// `N` is the grid dimension, `A` the agent type and `S` any extra
/// model-level state the host wants callbacks to reach (defaults to `()`).
///
/// The grid and population are public so behaviors can use their full APIs.
/// Placing or removing an agent directly on just one of them is allowed but
/// leaves the two out of step; [`spawn`](Self::spawn) and
/// [`remove`](Self::remove) update both.
pub struct World<const N: usize, A, S = ()> {
    pub grid:       Grid<N>,
    pub population: Population<A>,
    /// Behavior RNG.  Independent of the scheduler's ordering stream.
    pub rng:        SimRng,
    pub state:      S,
    ids:            IdGenerator,
}

impl<const N: usize, A, S> World<N, A, S> {
    pub fn new(grid: Grid<N>, rng: SimRng, state: S) -> Self {
        Self {
            grid,
            population: Population::new(),
            rng,
            state,
            ids: IdGenerator::new(),
        }
    }

    /// Mint a fresh id, greater than every id this world issued before.
    pub fn next_id(&mut self) -> AgentId {
        self.ids.next()
    }

    /// Number of registered agents.
    pub fn agent_count(&self) -> usize {
        self.population.len()
    }

    /// Mint an id, build the agent with `make`, register it and place it at
    /// `coord`.
    ///
    /// If placement fails the agent is unregistered again and the error
    /// returned; the minted id is not reused.
    ///
    /// # Errors
    /// - [`ModelError::Config`] — `make` built an agent reporting another id.
    /// - [`ModelError::Space`] — `coord` is invalid or (Solo) occupied.
    pub fn spawn(
        &mut self,
        make:  impl FnOnce(AgentId) -> A,
        coord: Coord<N>,
    ) -> ModelResult<AgentId>
    where
        A: Identity,
    {
        let id = self.ids.next();
        let agent = make(id);
        if agent.id() != id {
            return Err(ModelError::Config(format!(
                "spawned agent reports {}, expected {id}",
                agent.id()
            )));
        }

        self.population.register(agent)?;
        if let Err(e) = self.grid.add(id, coord) {
            self.population.unregister(id)?;
            return Err(e.into());
        }
        trace!(agent = %id, at = %coord, "spawned");
        Ok(id)
    }

    /// Unregister `agent` and take it off the grid.
    ///
    /// Returns the agent's shared handle.  Safe to call from inside a
    /// callback, including on the calling agent itself.
    ///
    /// Fails with [`ModelError::Population`] if `agent` is not registered.
    pub fn remove(&mut self, agent: AgentId) -> ModelResult<Rc<RefCell<A>>> {
        let handle = self.population.unregister(agent)?;
        if self.grid.contains(agent) {
            self.grid.delete(agent)?;
        }
        trace!(%agent, "removed");
        Ok(handle)
    }
}

impl<const N: usize, A, S> Context for World<N, A, S>
where
    A: Agent<World<N, A, S>>,
{
    type Agent = A;

    fn population(&self) -> &Population<A> {
        &self.population
    }
}
