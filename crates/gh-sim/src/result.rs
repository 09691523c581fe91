//! `SimulationResult`: the immutable outcome of one run.

use gh_core::{Location, Tick};

use crate::{DroneStatistics, IrrigationRecord, RunSnapshot, Timeline};

/// Totals, per-drone statistics, and the full action timeline of one run.
///
/// Built once when the run ends; fields are read through accessors only.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    greenhouse_name:  String,
    plan_name:        String,
    timeline:         Timeline,
    total_time:       Tick,
    total_water:      f64,
    total_fertilizer: f64,
    tasks_completed:  usize,
    drone_statistics: Vec<DroneStatistics>,
    tasks:            Vec<Location>,
    irrigations:      Vec<IrrigationRecord>,
}

impl SimulationResult {
    /// Assemble the result; water and fertilizer totals are summed from
    /// `drone_statistics`, whose order is the greenhouse's drone order.
    /// `tasks` is the plan's full task list and `irrigations` the completions
    /// in tick order.
    pub(crate) fn new(
        greenhouse_name:  &str,
        plan_name:        &str,
        timeline:         Timeline,
        total_time:       Tick,
        drone_statistics: Vec<DroneStatistics>,
        tasks:            Vec<Location>,
        irrigations:      Vec<IrrigationRecord>,
    ) -> Self {
        let total_water = drone_statistics.iter().map(|s| s.water_used).sum();
        let total_fertilizer = drone_statistics.iter().map(|s| s.fertilizer_used).sum();
        Self {
            greenhouse_name: greenhouse_name.to_owned(),
            plan_name: plan_name.to_owned(),
            timeline,
            total_time,
            total_water,
            total_fertilizer,
            tasks_completed: irrigations.len(),
            drone_statistics,
            tasks,
            irrigations,
        }
    }

    pub fn greenhouse_name(&self) -> &str {
        &self.greenhouse_name
    }

    pub fn plan_name(&self) -> &str {
        &self.plan_name
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Tick at which the last task was completed; `Tick::ZERO` for an
    /// empty plan.
    pub fn total_time(&self) -> Tick {
        self.total_time
    }

    /// Liters of water used across all drones.
    pub fn total_water(&self) -> f64 {
        self.total_water
    }

    /// Grams of fertilizer used across all drones.
    pub fn total_fertilizer(&self) -> f64 {
        self.total_fertilizer
    }

    /// Tasks dequeued during the run (equals the plan's task count).
    pub fn tasks_completed(&self) -> usize {
        self.tasks_completed
    }

    pub fn drone_statistics(&self) -> &[DroneStatistics] {
        &self.drone_statistics
    }

    pub fn statistics_for(&self, drone_name: &str) -> Option<&DroneStatistics> {
        self.drone_statistics.iter().find(|s| s.drone_name == drone_name)
    }

    /// Sum of `plants_irrigated` over all drones.
    pub fn plants_irrigated(&self) -> u32 {
        self.drone_statistics.iter().map(|s| s.plants_irrigated).sum()
    }

    /// Every completed task, in completion order.
    pub fn irrigations(&self) -> &[IrrigationRecord] {
        &self.irrigations
    }

    /// Replay the run up to and including `second`.
    ///
    /// Second 0 is the state before the first tick; any second past the end
    /// of the timeline gives the final state.
    pub fn snapshot_at(&self, second: Tick) -> RunSnapshot<'_> {
        let done = self.irrigations.iter().take_while(|r| r.tick <= second);

        let mut drone_statistics: Vec<DroneStatistics> = self
            .drone_statistics
            .iter()
            .map(|s| DroneStatistics::zeroed(s.drone_id, s.drone_name.clone()))
            .collect();
        let mut completed = 0;
        for record in done {
            completed += 1;
            if !record.plant_found {
                continue;
            }
            if let Some(stats) = drone_statistics.get_mut(record.drone_index) {
                stats.add_usage(record.water_liters, record.fertilizer_grams);
            }
        }

        RunSnapshot {
            second,
            actions: self.timeline.actions_at_second(second),
            remaining_tasks: self.tasks.get(completed..).unwrap_or(&[]),
            drone_statistics,
        }
    }
}
