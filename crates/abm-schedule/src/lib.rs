//! `abm-schedule` — decides in which order agents act, and drives them.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`scheduler`]  | `Scheduler` trait, `FailurePolicy`, `StepReport`           |
//! | [`sequential`] | `SequentialScheduler` — registration order                 |
//! | [`random`]     | `RandomScheduler` — fresh seeded shuffle every step        |
//! | [`staged`]     | `StagedScheduler` — all `step`s, then all `advance`s       |
//! | [`policy`]     | `SchedulePolicy`, `StageOrder`, `Schedule` (enum dispatch) |
//! | [`error`]      | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # One step
//!
//! ```text
//! step_count += 1
//! order = population.ids()            // snapshot, registration order
//! (shuffle order)                     // Random / Staged-random
//! for id in order:
//!     agent = population.lookup(id)   // vanished since snapshot → skip
//!     agent.step(ctx)                 // failure → FailurePolicy
//! (for id in order: agent.advance(ctx))   // Staged only, after all steps
//! ```
//!
//! Schedulers never own agents; they hold ids and borrow instances from the
//! population one at a time.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on policy types.           |

pub mod error;
pub mod policy;
pub mod random;
pub mod scheduler;
pub mod sequential;
pub mod staged;


pub use error::{ScheduleError, ScheduleResult};
pub use policy::{Schedule, SchedulePolicy, StageOrder};
pub use random::RandomScheduler;
pub use scheduler::{FailurePolicy, Scheduler, StepReport};
pub use sequential::SequentialScheduler;
pub use staged::StagedScheduler;
