//! The money agent: wander to a random Moore neighbor, then hand one unit of
//! wealth to a random cellmate.

use tracing::trace;

use abm_agent::{Agent, AgentResult, Identity, StagedAgent};
use abm_core::AgentId;
use abm_model::World;
use abm_space::{Coord, Neighborhood};

pub type Economy<const N: usize> = World<N, MoneyAgent<N>>;

pub struct MoneyAgent<const N: usize> {
    id:      AgentId,
    wealth:  u32,
    steps:   u64,
    /// Two-phase mode: choose in `step`, commit in `advance`.
    staged:  bool,
    pending: Option<Plan<N>>,
}

/// Decision taken in the first phase of a staged step.
struct Plan<const N: usize> {
    recipient: Option<AgentId>,
    target:    Coord<N>,
}

impl<const N: usize> MoneyAgent<N> {
    pub fn new(id: AgentId, wealth: u32, staged: bool) -> Self {
        Self { id, wealth, steps: 0, staged, pending: None }
    }

    pub fn wealth(&self) -> u32 {
        self.wealth
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn pick_move(&self, world: &mut Economy<N>) -> AgentResult<Coord<N>> {
        let options: Vec<Coord<N>> = world
            .grid
            .neighborhood_of(self.id, false, Neighborhood::Moore)?
            .into_iter()
            .collect();
        match world.rng.choose(&options) {
            Some(&c) => Ok(c),
            None => Ok(world.grid.location_of(self.id)?),
        }
    }

    fn pick_recipient(&self, world: &mut Economy<N>) -> AgentResult<Option<AgentId>> {
        let here = world.grid.location_of(self.id)?;
        let mates: Vec<AgentId> = world
            .grid
            .contents_of(here)?
            .iter()
            .copied()
            .filter(|&a| a != self.id)
            .collect();
        Ok(world.rng.choose(&mates).copied())
    }

    fn give(&mut self, world: &Economy<N>, recipient: AgentId) {
        if self.wealth == 0 {
            return;
        }
        // The recipient may have left since it was picked.
        if let Some(other) = world.population.lookup(recipient) {
            trace!(from = %self.id, to = %recipient, "give");
            other.borrow_mut().wealth += 1;
            self.wealth -= 1;
        }
    }
}

impl<const N: usize> Identity for MoneyAgent<N> {
    fn id(&self) -> AgentId {
        self.id
    }
}

impl<const N: usize> Agent<Economy<N>> for MoneyAgent<N> {
    fn step(&mut self, world: &mut Economy<N>) -> AgentResult<()> {
        self.steps += 1;

        if self.staged {
            let target = self.pick_move(world)?;
            let recipient = self.pick_recipient(world)?;
            self.pending = Some(Plan { recipient, target });
            return Ok(());
        }

        let target = self.pick_move(world)?;
        world.grid.move_agent(self.id, target)?;
        if let Some(recipient) = self.pick_recipient(world)? {
            self.give(world, recipient);
        }
        Ok(())
    }

    fn as_staged(&mut self) -> Option<&mut dyn StagedAgent<Economy<N>>> {
        if self.staged { Some(self) } else { None }
    }
}

impl<const N: usize> StagedAgent<Economy<N>> for MoneyAgent<N> {
    fn advance(&mut self, world: &mut Economy<N>) -> AgentResult<()> {
        let Some(plan) = self.pending.take() else {
            return Ok(());
        };
        if let Some(recipient) = plan.recipient {
            self.give(world, recipient);
        }
        world.grid.move_agent(self.id, plan.target)?;
        Ok(())
    }
}
