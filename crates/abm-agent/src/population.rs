//! `Population`: directory of every live agent.
//!
//! # Sharing
//!
//! Agents are held as `Rc<RefCell<A>>`.  A scheduler clones the `Rc` out of
//! the directory before invoking a callback, so the running agent is
//! mutably borrowed while the population itself stays free to change.
//! Other agents can be looked up and borrowed from inside a callback; the
//! running agent must not look itself up.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use abm_core::AgentId;

use crate::{Identity, PopulationError, PopulationResult};

/// All registered agents, keyed by id, remembering registration order.
pub struct Population<A> {
    agents: FxHashMap<AgentId, Rc<RefCell<A>>>,
    /// Registration order.  Always holds exactly the keys of `agents`.
    order:  Vec<AgentId>,
}

impl<A> Population<A> {
    pub fn new() -> Self {
        Self { agents: FxHashMap::default(), order: Vec::new() }
    }

    /// Register an agent already wrapped for sharing.
    ///
    /// Fails with [`PopulationError::DuplicateAgent`] if its id is present.
    pub fn register_shared(&mut self, agent: Rc<RefCell<A>>) -> PopulationResult<AgentId>
    where
        A: Identity,
    {
        let id = agent.borrow().id();
        if self.agents.contains_key(&id) {
            return Err(PopulationError::DuplicateAgent(id));
        }
        self.agents.insert(id, agent);
        self.order.push(id);
        Ok(id)
    }

    /// Register an agent, taking ownership.  The agent keeps the id it was
    /// built with.
    pub fn register(&mut self, agent: A) -> PopulationResult<AgentId>
    where
        A: Identity,
    {
        self.register_shared(Rc::new(RefCell::new(agent)))
    }

    /// Remove an agent from the directory and from all future scheduling.
    ///
    /// Returns the instance; it lives on for as long as the caller (or a
    /// scheduler mid-step) still holds it.
    pub fn unregister(&mut self, id: AgentId) -> PopulationResult<Rc<RefCell<A>>> {
        let agent = self
            .agents
            .remove(&id)
            .ok_or(PopulationError::AgentNotFound(id))?;
        self.order.retain(|&a| a != id);
        Ok(agent)
    }

    /// The agent registered as `id`, if any.
    ///
    /// Absence is routine (the agent may have been removed since a snapshot
    /// was taken), hence `Option` rather than an error.
    pub fn lookup(&self, id: AgentId) -> Option<Rc<RefCell<A>>> {
        self.agents.get(&id).cloned()
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Snapshot of registered ids in registration order.
    pub fn ids(&self) -> Vec<AgentId> {
        self.order.clone()
    }

    /// Registered agents in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, &Rc<RefCell<A>>)> + '_ {
        self.order.iter().filter_map(|id| self.agents.get(id).map(|a| (*id, a)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<A> Default for Population<A> {
    fn default() -> Self {
        Self::new()
    }
}
