//! The `OutputWriter` trait implemented by backend writers.

use crate::{ActionRow, DroneStatsRow, OutputResult, PlanSummaryRow};

/// Sink for simulation output rows.
///
/// Errors surface through the observer as a stored error, retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick's actions.
    fn write_actions(&mut self, rows: &[ActionRow]) -> OutputResult<()>;

    /// Write the summary row of a finished run.
    fn write_plan_summary(&mut self, row: &PlanSummaryRow) -> OutputResult<()>;

    /// Write per-drone statistics of a finished run.
    fn write_drone_stats(&mut self, rows: &[DroneStatsRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent; with nothing written since the last call it is a no-op.
    /// Writers stay usable afterwards, so one writer can serve many runs.
    fn finish(&mut self) -> OutputResult<()>;
}
