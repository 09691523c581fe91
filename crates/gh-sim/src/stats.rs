use gh_core::{DroneId, Location, Tick};
use gh_greenhouse::{Drone, Plant};

/// Resources one drone consumed during one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroneStatistics {
    pub drone_id:         DroneId,
    pub drone_name:       String,
    pub water_used:       f64,
    pub fertilizer_used:  f64,
    pub plants_irrigated: u32,
}

impl DroneStatistics {
    /// Zeroed statistics for `drone`.
    pub fn new(drone: &Drone) -> Self {
        Self::zeroed(drone.id, drone.name.clone())
    }

    pub(crate) fn zeroed(drone_id: DroneId, drone_name: String) -> Self {
        Self {
            drone_id,
            drone_name,
            water_used:       0.0,
            fertilizer_used:  0.0,
            plants_irrigated: 0,
        }
    }

    /// Account for one irrigation of `plant`.
    pub fn record(&mut self, plant: &Plant) {
        self.add_usage(plant.water_liters, plant.fertilizer_grams);
    }

    pub(crate) fn add_usage(&mut self, water: f64, fertilizer: f64) {
        self.water_used += water;
        self.fertilizer_used += fertilizer;
        self.plants_irrigated += 1;
    }
}

/// One completed task: who irrigated which cell, when, and what it used.
///
/// `plant_found` is `false` for a cell with no registered plant; such a
/// completion uses nothing and does not count as an irrigated plant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IrrigationRecord {
    pub tick:             Tick,
    /// Index of the drone in the greenhouse's drone order.
    pub drone_index:      usize,
    pub task:             Location,
    pub water_liters:     f64,
    pub fertilizer_grams: f64,
    pub plant_found:      bool,
}
