//! Simulation observer trait for progress reporting and data collection.

use gh_core::{Location, Tick};
use gh_greenhouse::Drone;
use gh_plan::IrrigationPlan;

use crate::{DroneAction, SimError, SimulationResult};

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_task_completed(&mut self, tick: Tick, drone: &Drone, task: Location) {
///         println!("{tick}: {} irrigated {task}", drone.name);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once after validation and reset, before the first tick.
    fn on_sim_start(&mut self, _greenhouse: &str, _plan: &IrrigationPlan) {}

    /// Called at the very start of each tick, before the decide phase.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called from the execute phase when `drone` irrigates and the head
    /// task `task` is dequeued.
    fn on_task_completed(&mut self, _tick: Tick, _drone: &Drone, _task: Location) {}

    /// Called at the end of each tick with every drone's action, in drone
    /// order.
    fn on_tick_end(&mut self, _tick: Tick, _actions: &[DroneAction]) {}

    /// Called once with the finished result.
    fn on_sim_end(&mut self, _result: &SimulationResult) {}

    /// Called instead of `on_sim_end` when a started run fails part-way
    /// (for example on the tick limit).  Ticks already reported through
    /// `on_tick_end` belong to a run that produced no result.
    fn on_sim_aborted(&mut self, _error: &SimError) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
