//! `abm-agent` — what an agent is, and where the live ones are kept.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`agent`]      | `Identity`, `Agent<Ctx>`, `StagedAgent<Ctx>`, `Context`   |
//! | [`population`] | `Population<A>` — `AgentId` → shared agent instance        |
//! | [`error`]      | `AgentError`, `PopulationError`, result aliases           |
//!
//! # Ownership
//!
//! The population owns every agent for its whole life as an
//! `Rc<RefCell<A>>`.  The grid only ever holds an agent's *location*, and a
//! scheduler only ever holds *ids*.  While an agent's callback runs it is
//! mutably borrowed by the scheduler, so other agents can be looked up and
//! borrowed freely but the running agent must not look itself up.

pub mod agent;
pub mod error;
pub mod population;


pub use agent::{Agent, Context, Identity, StagedAgent};
pub use error::{AgentError, AgentResult, PopulationError, PopulationResult};
pub use population::Population;
