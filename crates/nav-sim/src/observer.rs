//! Observer trait for presentation layers and progress reporting.

use nav_agent::Agent;
use nav_core::Tick;
use nav_grid::Grid;

use crate::TickOutcome;

/// Callbacks invoked by the controller's run helpers
/// ([`run_ticks`][crate::SimulationController::run_ticks],
/// [`run_until_settled`][crate::SimulationController::run_until_settled]).
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SimObserver for StepPrinter {
///     fn on_tick(&mut self, tick: Tick, _outcome: TickOutcome, _grid: &Grid, agent: &Agent) {
///         println!("{tick}: agent at {}", agent.position());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every tick with the post-tick state.
    fn on_tick(&mut self, _tick: Tick, _outcome: TickOutcome, _grid: &Grid, _agent: &Agent) {}

    /// Called once when the agent reaches its target.
    fn on_finished(&mut self, _tick: Tick, _path_length: usize) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
