//! `abm-space` — the spatial domain agents live in.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`coord`]        | `Coord<N>`, `Coord1D` / `Coord2D` / `Coord3D`, `Distance` |
//! | [`neighborhood`] | `Neighborhood` (VonNeumann / Moore), offset tables        |
//! | [`config`]       | `GridConfig<N>`, `Occupancy` (Solo / Multi)               |
//! | [`grid`]         | `Grid<N>` — bidirectional agent ⇄ cell index              |
//! | [`error`]        | `SpaceError`, `SpaceResult<T>`                            |
//!
//! # Design
//!
//! One `Grid<N>` type serves every combination of dimensionality (1–3, as a
//! const generic) and occupancy policy (a runtime [`Occupancy`] value).
//! There is no type per (dimension × policy) pair.
//!
//! A grid stores *locations*, never agents.  It keeps two maps that always
//! agree:
//!
//! ```text
//! cells:     Coord<N> → [AgentId]     "who is at cell c?"     O(1)
//! locations: AgentId  → Coord<N>      "where is agent a?"     O(log n)
//! ```
//!
//! Both are private; `add`, `delete` and `move_agent` are the only ways to
//! change them.

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod neighborhood;

#[cfg(test)]
mod tests;

pub use config::{GridConfig, Occupancy};
pub use coord::{Coord, Coord1D, Coord2D, Coord3D, Distance};
pub use error::{SpaceError, SpaceResult};
pub use grid::Grid;
pub use neighborhood::Neighborhood;
