//! Agent identity.
//!
//! An `AgentId` is an opaque, totally ordered handle minted by an
//! [`IdGenerator`].  Ids are `Copy + Ord + Hash` so they can key ordered and
//! hashed maps without ceremony.  The inner counter is private: the only way
//! to obtain a fresh id is [`IdGenerator::next`], which guarantees that every
//! id it returns is strictly greater than all ids it returned before.
//!
//! There is no process-wide counter.  Each `World` owns one generator, so id
//! uniqueness is scoped to the generator that minted them and holds only for
//! the lifetime of the process.

use std::fmt;

/// Unique, ordered identifier for one simulated agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(u64);

impl AgentId {
    /// The underlying counter value.  Useful for logging and for seeding
    /// per-agent randomness; carries no meaning beyond ordering.
    #[inline(always)]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

// ── IdGenerator ───────────────────────────────────────────────────────────────

/// Monotonic `AgentId` source.
///
/// `next()` never reuses a value.  The generator is a plain owned value
/// (`&mut self` to advance), so it is confined to whatever owns it; wrap it
/// in a lock if a host ever shares it between threads.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    /// Last value handed out; `0` means nothing issued yet.
    last: u64,
}

impl IdGenerator {
    /// A generator whose first id is `AgentId(1)`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator whose ids are all strictly greater than `id`.
    ///
    /// Lets a second generator continue where another left off without
    /// colliding with ids the first one already issued.
    pub fn starting_after(id: AgentId) -> Self {
        Self { last: id.0 }
    }

    /// Mint a fresh id, strictly greater than every id this generator
    /// produced before.
    ///
    /// A `u64` counter cannot realistically be exhausted: at a billion ids
    /// per second it lasts for centuries.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> AgentId {
        self.last += 1;
        AgentId(self.last)
    }

    /// The most recently issued id, or `None` if `next()` was never called.
    pub fn peek(&self) -> Option<AgentId> {
        (self.last > 0).then_some(AgentId(self.last))
    }

    /// Number of ids issued so far.
    pub fn issued(&self) -> u64 {
        self.last
    }
}
