//! `Configuration`: everything a collaborator parsed from its input file.
//!
//! Holds the global drone registry (drones exist independently of any
//! greenhouse) and the list of greenhouses, each of which binds some of the
//! registered drones to its rows.

use gh_core::DroneId;

use crate::{DroneSpec, Greenhouse, GreenhouseError, GreenhouseResult};

#[derive(Debug, Clone, Default)]
pub struct Configuration {
    drones:      Vec<DroneSpec>,
    greenhouses: Vec<Greenhouse>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a drone.  Ids and names are unique across the registry.
    pub fn add_drone(&mut self, spec: DroneSpec) -> GreenhouseResult<()> {
        if self.drones.iter().any(|d| d.id == spec.id || d.name == spec.name) {
            return Err(GreenhouseError::DuplicateEntry {
                kind: "drone",
                name: spec.name,
            });
        }
        self.drones.push(spec);
        Ok(())
    }

    /// Register a greenhouse.  Every drone it uses must already be in the
    /// registry, and greenhouse names are unique.
    pub fn add_greenhouse(&mut self, greenhouse: Greenhouse) -> GreenhouseResult<()> {
        if self.greenhouse_by_name(greenhouse.name()).is_some() {
            return Err(GreenhouseError::DuplicateEntry {
                kind: "greenhouse",
                name: greenhouse.name().to_owned(),
            });
        }
        if let Some(stray) = greenhouse
            .drones()
            .iter()
            .find(|d| self.drone_by_id(d.id).is_none())
        {
            return Err(GreenhouseError::UnknownDrone(stray.id));
        }
        self.greenhouses.push(greenhouse);
        Ok(())
    }

    pub fn drones(&self) -> &[DroneSpec] {
        &self.drones
    }

    pub fn greenhouses(&self) -> &[Greenhouse] {
        &self.greenhouses
    }

    pub fn drone_by_id(&self, id: DroneId) -> Option<&DroneSpec> {
        self.drones.iter().find(|d| d.id == id)
    }

    /// Like [`drone_by_id`][Self::drone_by_id] but fails with
    /// [`GreenhouseError::UnknownDrone`].  Handy with `?` while building.
    pub fn spec(&self, id: DroneId) -> GreenhouseResult<&DroneSpec> {
        self.drone_by_id(id).ok_or(GreenhouseError::UnknownDrone(id))
    }

    pub fn greenhouse_by_name(&self, name: &str) -> Option<&Greenhouse> {
        self.greenhouses.iter().find(|g| g.name() == name)
    }

    pub fn greenhouse_by_name_mut(&mut self, name: &str) -> Option<&mut Greenhouse> {
        self.greenhouses.iter_mut().find(|g| g.name() == name)
    }
}
