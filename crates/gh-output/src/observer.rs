//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use gh_core::Tick;
use gh_plan::IrrigationPlan;
use gh_sim::{DroneAction, SimError, SimObserver, SimulationResult};

use crate::row::{ActionRow, DroneStatsRow, PlanSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the timeline, the plan summary and the
/// per-drone statistics of every observed run to an [`OutputWriter`].
///
/// Action rows are held back until the run finishes, so a run that aborts
/// part-way leaves nothing behind in the output.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    greenhouse:   String,
    plan:         String,
    pending:      Vec<ActionRow>,
    aborted_runs: usize,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            greenhouse:   String::new(),
            plan:         String::new(),
            pending:      Vec::new(),
            aborted_runs: 0,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Runs that were started but aborted; none of their rows were written.
    pub fn aborted_runs(&self) -> usize {
        self.aborted_runs
    }

    /// Flush the writer outside of a run.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer (e.g. to inspect rows after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_start(&mut self, greenhouse: &str, plan: &IrrigationPlan) {
        self.greenhouse = greenhouse.to_owned();
        self.plan = plan.name().to_owned();
        self.pending.clear();
    }

    fn on_tick_end(&mut self, tick: Tick, actions: &[DroneAction]) {
        let rows = actions.iter().map(|a| ActionRow {
            greenhouse:  self.greenhouse.clone(),
            plan:        self.plan.clone(),
            second:      tick.0,
            drone:       a.drone_name.clone(),
            action:      a.kind.as_str(),
            description: a.description.clone(),
        });
        self.pending.extend(rows);
    }

    fn on_sim_end(&mut self, result: &SimulationResult) {
        let rows = std::mem::take(&mut self.pending);
        if !rows.is_empty() {
            let written = self.writer.write_actions(&rows);
            self.store_err(written);
        }

        let summary = PlanSummaryRow {
            greenhouse:             result.greenhouse_name().to_owned(),
            plan:                   result.plan_name().to_owned(),
            total_time_secs:        result.total_time().0,
            total_water_liters:     result.total_water(),
            total_fertilizer_grams: result.total_fertilizer(),
            tasks_completed:        result.tasks_completed(),
        };
        let written = self.writer.write_plan_summary(&summary);
        self.store_err(written);

        let stats: Vec<DroneStatsRow> = result
            .drone_statistics()
            .iter()
            .map(|s| DroneStatsRow {
                greenhouse:       summary.greenhouse.clone(),
                plan:             summary.plan.clone(),
                drone:            s.drone_name.clone(),
                water_liters:     s.water_used,
                fertilizer_grams: s.fertilizer_used,
                plants_irrigated: s.plants_irrigated,
            })
            .collect();
        let written = self.writer.write_drone_stats(&stats);
        self.store_err(written);

        let flushed = self.writer.finish();
        self.store_err(flushed);
    }

    fn on_sim_aborted(&mut self, _error: &SimError) {
        self.pending.clear();
        self.aborted_runs += 1;
    }
}
