//! `abm-model` — ties grid, population and scheduler into a runnable model.
//!
//! # Pieces
//!
//! ```text
//! ModelBuilder ──build──▶ Model ─┬─ World   (grid, population, rng, state, ids)
//!   ModelConfig                  └─ Schedule (sequential | random | staged)
//!
//! Model::step  = schedule.step(&mut world)   → StepReport
//! Model::run   = n × step, observer hooks around each
//! ```
//!
//! [`World`] is the context every agent callback receives.  Agents reach the
//! grid and population through its public fields; [`World::spawn`] and
//! [`World::remove`] change both at once so they never disagree.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use abm_model::{ModelBuilder, ModelConfig};
//! use abm_schedule::SchedulePolicy;
//! use abm_space::{Coord1D, Grid};
//!
//! let grid = Grid::multi([10], [true])?;
//! let config = ModelConfig::seeded(7).schedule(SchedulePolicy::Random { seed: None });
//! let mut model = ModelBuilder::new(grid).config(config).build()?;
//! for x in 0..10 {
//!     model.world_mut().spawn(|id| Walker::new(id), Coord1D::new(x))?;
//! }
//! model.run(100)?;
//! ```

pub mod builder;
pub mod error;
pub mod model;
pub mod observer;
pub mod world;


pub use builder::{ModelBuilder, ModelConfig};
pub use error::{ModelError, ModelResult};
pub use model::Model;
pub use observer::{ModelObserver, NoopObserver};
pub use world::World;
