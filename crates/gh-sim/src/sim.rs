//! The `Simulator` struct and its tick loop.

use gh_core::{Location, SimClock, SimConfig, Tick};
use gh_greenhouse::Greenhouse;
use gh_plan::{IrrigationPlan, PlanRun};
use tracing::{debug, info, warn};

use crate::decide::decide_all;
use crate::{
    ActionKind, DroneAction, DroneStatistics, IrrigationRecord, SimError, SimObserver, SimResult,
    SimulationResult, Timeline,
};

/// The discrete simulator for one greenhouse.
///
/// Borrows the greenhouse mutably for its lifetime: drone run state
/// (position, status) is reset and then driven by every [`run`][Self::run].
/// The plan cursor, timeline and statistics are created fresh per run and
/// handed back in the [`SimulationResult`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulator<'g> {
    /// Run settings (tick cap, terminal finish tick).
    pub config: SimConfig,

    /// Tick clock; after a run it holds the last executed tick.
    pub clock: SimClock,

    pub(crate) greenhouse: &'g mut Greenhouse,
}

impl<'g> Simulator<'g> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Read-only view of the simulated greenhouse (drone state included).
    pub fn greenhouse(&self) -> &Greenhouse {
        self.greenhouse
    }

    /// Check that every task of `plan` targets a row with a bound drone.
    ///
    /// A plan that fails this check would never drain: the head task could
    /// not be served and every drone would wait forever.
    pub fn validate_plan(&self, plan: &IrrigationPlan) -> SimResult<()> {
        for (task_index, &task) in plan.tasks().iter().enumerate() {
            if self.greenhouse.drone_for_row(task.row).is_none() {
                return Err(SimError::UnassignedRow {
                    row: task.row,
                    task_index,
                    task,
                });
            }
        }
        Ok(())
    }

    /// Simulate `plan` from scratch and return its result.
    ///
    /// The plan is validated before any state is touched; a rejected plan
    /// leaves drones exactly as they were and fires no callbacks.  Once
    /// `on_sim_start` has fired, every run ends in exactly one of
    /// `on_sim_end` or `on_sim_aborted`.
    pub fn run<O: SimObserver>(
        &mut self,
        plan:     &IrrigationPlan,
        observer: &mut O,
    ) -> SimResult<SimulationResult> {
        if let Err(e) = self.validate_plan(plan) {
            warn!(greenhouse = self.greenhouse.name(), plan = plan.name(), %e, "Plan rejected");
            return Err(e);
        }

        self.reset();
        let mut log = RunLog {
            run:         plan.start(),
            timeline:    Timeline::new(),
            stats:       self.greenhouse.drones().iter().map(DroneStatistics::new).collect(),
            irrigations: Vec::new(),
        };

        info!(
            greenhouse = self.greenhouse.name(),
            plan = plan.name(),
            drones = self.greenhouse.drones().len(),
            tasks = plan.len(),
            "Simulation started"
        );
        observer.on_sim_start(self.greenhouse.name(), plan);

        let total_time = match self.drive(plan, &mut log, observer) {
            Ok(total_time) => total_time,
            Err(e) => {
                observer.on_sim_aborted(&e);
                return Err(e);
            }
        };

        let result = SimulationResult::new(
            self.greenhouse.name(),
            plan.name(),
            log.timeline,
            total_time,
            log.stats,
            plan.tasks().to_vec(),
            log.irrigations,
        );

        info!(
            greenhouse = result.greenhouse_name(),
            plan = result.plan_name(),
            total_time = result.total_time().0,
            clock = %self.clock,
            water = result.total_water(),
            fertilizer = result.total_fertilizer(),
            "Simulation finished"
        );
        observer.on_sim_end(&result);
        Ok(result)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn reset(&mut self) {
        self.clock.reset();
        self.greenhouse.reset_drones();
    }

    /// Tick until the plan drains, then the optional finish tick.  Returns
    /// the tick of the last completed task.
    fn drive<O: SimObserver>(
        &mut self,
        plan:     &IrrigationPlan,
        log:      &mut RunLog,
        observer: &mut O,
    ) -> SimResult<Tick> {
        while !log.run.is_completed() {
            self.clock.advance();
            let now = self.clock.current_tick;
            if self.config.exceeds_limit(now) {
                let limit = self.config.max_ticks.unwrap_or_default();
                warn!(plan = plan.name(), limit, remaining = log.run.remaining(), "Tick limit exceeded");
                return Err(SimError::TickLimitExceeded { limit });
            }
            self.process_tick(now, log, observer)?;
        }

        let total_time = self.clock.current_tick;

        // Optional terminal tick: the queue is empty, so every drone decides
        // `finish`.  Logged in the timeline, not counted in total_time.
        if self.config.emit_finish_tick {
            self.clock.advance();
            let now = self.clock.current_tick;
            self.process_tick(now, log, observer)?;
        }

        Ok(total_time)
    }

    fn process_tick<O: SimObserver>(
        &mut self,
        now:      Tick,
        log:      &mut RunLog,
        observer: &mut O,
    ) -> SimResult<()> {
        observer.on_tick_start(now);

        // ── Phase 1: peek the head task ───────────────────────────────────
        let head = log.run.next_task();

        // ── Phase 2: decide (read-only) ───────────────────────────────────
        let actions = decide_all(self.greenhouse.drones(), head);

        // ── Phase 3: record ───────────────────────────────────────────────
        log.timeline.record_second(now, actions);

        // ── Phase 4: execute ──────────────────────────────────────────────
        //
        // Runs strictly after every decision of this tick is fixed, so a
        // dequeue here is only visible to the next tick's decide phase.
        let RunLog { run, timeline, stats, irrigations } = log;
        let actions = timeline.actions_at_second(now);
        self.execute_all(now, actions, run, stats, irrigations, observer)?;

        observer.on_tick_end(now, actions);
        Ok(())
    }

    /// Apply one tick's actions, in drone order.
    fn execute_all<O: SimObserver>(
        &mut self,
        now:         Tick,
        actions:     &[DroneAction],
        run:         &mut PlanRun,
        stats:       &mut [DroneStatistics],
        irrigations: &mut Vec<IrrigationRecord>,
        observer:    &mut O,
    ) -> SimResult<()> {
        for (i, action) in actions.iter().enumerate() {
            let drone = &mut self.greenhouse.drones_mut()[i];
            match action.kind {
                ActionKind::MoveForward  => drone.move_forward(),
                ActionKind::MoveBackward => drone.move_backward(),
                ActionKind::Wait         => drone.wait(),
                ActionKind::Finish       => drone.finish(),
                ActionKind::Irrigate     => {
                    drone.irrigate();
                    let Some(row) = drone.assigned_row() else { continue };
                    let at = Location::new(row, drone.position());

                    // No plant at the cell: the task still completes, with
                    // no resource usage.
                    let plant = self.greenhouse.plant_at(at);
                    if let Some(plant) = plant {
                        stats[i].record(plant);
                    }

                    let task = run.complete_current_task()?;
                    irrigations.push(IrrigationRecord {
                        tick:             now,
                        drone_index:      i,
                        task,
                        water_liters:     plant.map_or(0.0, |p| p.water_liters),
                        fertilizer_grams: plant.map_or(0.0, |p| p.fertilizer_grams),
                        plant_found:      plant.is_some(),
                    });

                    let drone = &self.greenhouse.drones()[i];
                    debug!(tick = now.0, drone = %drone.name, %task, "Task completed");
                    observer.on_task_completed(now, drone, task);
                }
            }
        }
        Ok(())
    }
}

/// Per-run state threaded through the tick loop.
struct RunLog {
    run:         PlanRun,
    timeline:    Timeline,
    stats:       Vec<DroneStatistics>,
    irrigations: Vec<IrrigationRecord>,
}
