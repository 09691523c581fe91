//! `RunSnapshot`: the state of a finished run as it stood at one second.

use std::fmt;

use gh_core::{Location, Tick};

use crate::{DroneAction, DroneStatistics};

/// Built by [`SimulationResult::snapshot_at`][crate::SimulationResult::snapshot_at].
#[derive(Debug, Clone, PartialEq)]
pub struct RunSnapshot<'r> {
    pub second:           Tick,
    /// Actions recorded at `second`, in drone order.
    pub actions:          &'r [DroneAction],
    /// Tasks still queued once `second` has executed, head first.
    pub remaining_tasks:  &'r [Location],
    /// Usage accumulated up to and including `second`, in drone order.
    pub drone_statistics: Vec<DroneStatistics>,
}

impl RunSnapshot<'_> {
    pub fn statistics_for(&self, drone_name: &str) -> Option<&DroneStatistics> {
        self.drone_statistics.iter().find(|s| s.drone_name == drone_name)
    }
}

impl fmt::Display for RunSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== state at second {} ===", self.second.0)?;
        for action in self.actions {
            writeln!(f, "  {action}")?;
        }
        write!(f, "queue:")?;
        if self.remaining_tasks.is_empty() {
            write!(f, " (empty)")?;
        }
        for task in self.remaining_tasks {
            write!(f, " {task}")?;
        }
        writeln!(f)?;
        for s in &self.drone_statistics {
            writeln!(
                f,
                "  {}: {} L, {} g, {} plant(s)",
                s.drone_name, s.water_used, s.fertilizer_used, s.plants_irrigated
            )?;
        }
        Ok(())
    }
}
