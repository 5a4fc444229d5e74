//! `abm-core` — foundational types for the `rust_abm` agent-based-modeling
//! toolkit.
//!
//! This crate is a dependency of every other `abm-*` crate.  It has no
//! `abm-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`ids`]    | `AgentId`, `IdGenerator`                        |
//! | [`step`]   | `Step` counter                                  |
//! | [`rng`]    | `SimRng` (seedable, shuffle / choose helpers)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `AgentId` and `Step`.    |

pub mod ids;
pub mod rng;
pub mod step;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{AgentId, IdGenerator};
pub use rng::SimRng;
pub use step::Step;
