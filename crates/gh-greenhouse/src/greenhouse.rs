//! The `Greenhouse` aggregate.
//!
//! Drones keep their registration order (`drones()[i]` is the i-th drone
//! registered); the simulator relies on that order for its timeline buckets
//! and statistics.  Plants are stored in registration order too, with a
//! `Location → index` map for O(1) lookups.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use gh_core::Location;
use gh_plan::IrrigationPlan;

use crate::{Drone, Plant};

/// `Location → index into plants`.
pub(crate) type PlantIndex = HashMap<Location, usize>;

/// A planting grid with its row-bound drones and irrigation plans.
///
/// Build with [`GreenhouseBuilder`][crate::GreenhouseBuilder].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Greenhouse {
    pub(crate) name:           String,
    pub(crate) num_rows:       u32,
    pub(crate) plants_per_row: u32,
    pub(crate) plants:         Vec<Plant>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) plant_index:    PlantIndex,
    pub(crate) drones:         Vec<Drone>,
    pub(crate) plans:          Vec<IrrigationPlan>,
}

impl Greenhouse {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn plants_per_row(&self) -> u32 {
        self.plants_per_row
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    /// Drones in registration order.
    pub fn drones(&self) -> &[Drone] {
        &self.drones
    }

    /// Mutable access to drone run state.  The slice cannot grow or shrink,
    /// and row bindings are read-only on `Drone`, so build-time invariants
    /// survive.
    pub fn drones_mut(&mut self) -> &mut [Drone] {
        &mut self.drones
    }

    pub fn plans(&self) -> &[IrrigationPlan] {
        &self.plans
    }

    pub fn plan_by_name(&self, name: &str) -> Option<&IrrigationPlan> {
        self.plans.iter().find(|p| p.name() == name)
    }

    /// The plant at `location`, if one is registered there.
    #[inline]
    pub fn plant_at(&self, location: Location) -> Option<&Plant> {
        self.plant_index.get(&location).map(|&i| &self.plants[i])
    }

    /// The drone bound to `row`, if any.
    pub fn drone_for_row(&self, row: u32) -> Option<&Drone> {
        self.drones.iter().find(|d| d.assigned_row() == Some(row))
    }

    pub fn drone_by_name(&self, name: &str) -> Option<&Drone> {
        self.drones.iter().find(|d| d.name == name)
    }

    /// Put every drone back at (position 0, idle).
    pub fn reset_drones(&mut self) {
        for drone in &mut self.drones {
            drone.reset_position();
        }
    }
}
