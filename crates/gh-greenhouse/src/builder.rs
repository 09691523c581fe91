//! Fluent builder for constructing a [`Greenhouse`].

use gh_plan::IrrigationPlan;

use crate::greenhouse::PlantIndex;
use crate::{Drone, DroneSpec, Greenhouse, GreenhouseError, GreenhouseResult, Plant};

/// Fluent builder for [`Greenhouse`].
///
/// Inputs are collected as-is; every invariant is checked once in
/// [`build`][Self::build].
///
/// # Example
///
/// ```rust,ignore
/// let d1 = config.spec(DroneId(1))?.clone();
/// let gh = GreenhouseBuilder::new("Invernadero San Marcos", 2, 3)
///     .plant(Plant::new(Location::new(1, 2), 2.0, 100.0, "tomate"))
///     .assign_drone(&d1, 1)
///     .plan(IrrigationPlan::new("Dia 1", "H1-P2")?)
///     .build()?;
/// ```
pub struct GreenhouseBuilder {
    name:           String,
    num_rows:       u32,
    plants_per_row: u32,
    plants:         Vec<Plant>,
    drones:         Vec<Drone>,
    plans:          Vec<IrrigationPlan>,
}

impl GreenhouseBuilder {
    /// `num_rows` and `plants_per_row` describe the grid for reporting; plant
    /// coordinates are not range-checked against them.
    pub fn new(name: impl Into<String>, num_rows: u32, plants_per_row: u32) -> Self {
        Self {
            name: name.into(),
            num_rows,
            plants_per_row,
            plants: Vec::new(),
            drones: Vec::new(),
            plans:  Vec::new(),
        }
    }

    pub fn plant(mut self, plant: Plant) -> Self {
        self.plants.push(plant);
        self
    }

    pub fn plants(mut self, plants: impl IntoIterator<Item = Plant>) -> Self {
        self.plants.extend(plants);
        self
    }

    /// Register `spec` as serving `row` in this greenhouse.
    pub fn assign_drone(mut self, spec: &DroneSpec, row: u32) -> Self {
        self.drones.push(Drone::new(spec.id, spec.name.clone(), Some(row)));
        self
    }

    /// Register `spec` without a row.  Such a drone waits on every tick.
    pub fn unassigned_drone(mut self, spec: &DroneSpec) -> Self {
        self.drones.push(Drone::new(spec.id, spec.name.clone(), None));
        self
    }

    pub fn plan(mut self, plan: IrrigationPlan) -> Self {
        self.plans.push(plan);
        self
    }

    /// Validate and return the greenhouse.
    pub fn build(self) -> GreenhouseResult<Greenhouse> {
        let plant_index = index_plants(&self.name, &self.plants)?;
        check_drones(&self.name, &self.drones)?;
        check_plans(&self.name, &self.plans)?;

        Ok(Greenhouse {
            name:           self.name,
            num_rows:       self.num_rows,
            plants_per_row: self.plants_per_row,
            plants:         self.plants,
            plant_index,
            drones:         self.drones,
            plans:          self.plans,
        })
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn index_plants(greenhouse: &str, plants: &[Plant]) -> GreenhouseResult<PlantIndex> {
    let mut index = PlantIndex::default();
    for (i, plant) in plants.iter().enumerate() {
        let location = plant.location();
        if index.insert(location, i).is_some() {
            return Err(GreenhouseError::DuplicatePlant {
                greenhouse: greenhouse.to_owned(),
                location,
            });
        }
    }
    Ok(index)
}

fn check_drones(greenhouse: &str, drones: &[Drone]) -> GreenhouseResult<()> {
    for (i, drone) in drones.iter().enumerate() {
        let earlier = &drones[..i];

        if earlier.iter().any(|d| d.name == drone.name) {
            return Err(GreenhouseError::DuplicateDrone {
                greenhouse: greenhouse.to_owned(),
                name:       drone.name.clone(),
            });
        }

        let Some(row) = drone.assigned_row() else { continue };
        if let Some(owner) = earlier.iter().find(|d| d.assigned_row() == Some(row)) {
            return Err(GreenhouseError::DuplicateRowAssignment {
                greenhouse: greenhouse.to_owned(),
                row,
                existing:   owner.name.clone(),
            });
        }
    }
    Ok(())
}

fn check_plans(greenhouse: &str, plans: &[IrrigationPlan]) -> GreenhouseResult<()> {
    for (i, plan) in plans.iter().enumerate() {
        if plans[..i].iter().any(|p| p.name() == plan.name()) {
            return Err(GreenhouseError::DuplicatePlan {
                greenhouse: greenhouse.to_owned(),
                name:       plan.name().to_owned(),
            });
        }
    }
    Ok(())
}
