//! Simulation observer trait for progress reporting and data collection.

use ped_core::{Grid, Tick};

use crate::StepReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, report: &StepReport) {
///         println!("tick {tick}: {} moved", report.moved);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before penalties are applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick's moves are committed.
    fn on_tick_end(&mut self, _tick: Tick, _report: &StepReport) {}

    /// Called after `on_tick_end` on every `config.output_interval_ticks`-th
    /// tick, with read-only access to the committed grid.
    fn on_snapshot(&mut self, _tick: Tick, _grid: &Grid) {}

    /// Called once after the final tick of a run.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
