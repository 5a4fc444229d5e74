//! Model observer trait for progress reporting and data collection.

use abm_core::Step;
use abm_schedule::StepReport;

/// Callbacks invoked by [`Model::run_observed`][crate::Model::run_observed]
/// around every step.
///
/// `W` is the model's world type.  All methods default to no-ops, so
/// implementors override only what they need.
///
/// # Example — wealth tracker
///
/// ```rust,ignore
/// struct Gini(Vec<f64>);
///
/// impl ModelObserver<World<1, Trader>> for Gini {
///     fn on_step_end(&mut self, _report: &StepReport, world: &World<1, Trader>) {
///         self.0.push(gini(world));
///     }
/// }
/// ```
pub trait ModelObserver<W> {
    /// Called before the step numbered `step` runs.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after each successful step.
    fn on_step_end(&mut self, _report: &StepReport, _world: &W) {}

    /// Called once after the last step of a run that did not fail.
    fn on_run_end(&mut self, _final_step: Step, _world: &W) {}
}

/// A [`ModelObserver`] that does nothing.
pub struct NoopObserver;

impl<W> ModelObserver<W> for NoopObserver {}
