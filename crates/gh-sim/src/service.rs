//! `IrrigationService`: runs plans across a whole [`Configuration`] and
//! keeps their results.
//!
//! Results are keyed by `(greenhouse name, plan name)`; re-simulating a plan
//! replaces its previous result.

use std::collections::BTreeMap;

use gh_core::SimConfig;
use gh_greenhouse::{Configuration, Greenhouse};
use tracing::{info, warn};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver, SimResult, SimulationResult};

/// Outcome of [`IrrigationService::simulate_all`].
#[derive(Debug, Default)]
pub struct SimulateAllReport {
    /// Number of plans simulated successfully.
    pub succeeded: usize,
    /// `(greenhouse, plan, error)` for every plan that failed.
    pub failed:    Vec<(String, String, SimError)>,
}

impl SimulateAllReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct IrrigationService {
    configuration: Configuration,
    sim_config:    SimConfig,
    results:       BTreeMap<(String, String), SimulationResult>,
}

impl IrrigationService {
    pub fn new(configuration: Configuration) -> Self {
        Self::with_sim_config(configuration, SimConfig::default())
    }

    /// Use `sim_config` for every run started by this service.
    pub fn with_sim_config(configuration: Configuration, sim_config: SimConfig) -> Self {
        Self {
            configuration,
            sim_config,
            results: BTreeMap::new(),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn greenhouse_names(&self) -> Vec<&str> {
        self.configuration.greenhouses().iter().map(Greenhouse::name).collect()
    }

    /// Plan names of `greenhouse`, in registration order.
    pub fn plan_names(&self, greenhouse: &str) -> SimResult<Vec<&str>> {
        let gh = self
            .configuration
            .greenhouse_by_name(greenhouse)
            .ok_or_else(|| SimError::UnknownGreenhouse(greenhouse.to_owned()))?;
        Ok(gh.plans().iter().map(|p| p.name()).collect())
    }

    /// Simulate one plan and store its result.
    pub fn simulate_plan(&mut self, greenhouse: &str, plan: &str) -> SimResult<&SimulationResult> {
        self.simulate_plan_with(greenhouse, plan, &mut NoopObserver)
    }

    /// Like [`simulate_plan`][Self::simulate_plan] with an observer attached.
    pub fn simulate_plan_with<O: SimObserver>(
        &mut self,
        greenhouse: &str,
        plan:       &str,
        observer:   &mut O,
    ) -> SimResult<&SimulationResult> {
        let gh = self
            .configuration
            .greenhouse_by_name_mut(greenhouse)
            .ok_or_else(|| SimError::UnknownGreenhouse(greenhouse.to_owned()))?;
        let irrigation_plan = gh
            .plan_by_name(plan)
            .cloned()
            .ok_or_else(|| SimError::UnknownPlan {
                greenhouse: greenhouse.to_owned(),
                plan:       plan.to_owned(),
            })?;

        let mut sim = SimBuilder::new(gh).config(self.sim_config.clone()).build()?;
        let result = sim.run(&irrigation_plan, observer)?;

        let key = (greenhouse.to_owned(), plan.to_owned());
        self.results.insert(key.clone(), result);
        Ok(&self.results[&key])
    }

    /// Simulate every plan of every greenhouse, in registration order.
    ///
    /// A failing plan is logged and reported; the remaining plans still run.
    pub fn simulate_all(&mut self) -> SimulateAllReport {
        self.simulate_all_with(&mut NoopObserver)
    }

    pub fn simulate_all_with<O: SimObserver>(&mut self, observer: &mut O) -> SimulateAllReport {
        let jobs: Vec<(String, String)> = self
            .configuration
            .greenhouses()
            .iter()
            .flat_map(|gh| {
                gh.plans()
                    .iter()
                    .map(move |p| (gh.name().to_owned(), p.name().to_owned()))
            })
            .collect();

        let mut report = SimulateAllReport::default();
        for (greenhouse, plan) in jobs {
            match self.simulate_plan_with(&greenhouse, &plan, observer) {
                Ok(_) => report.succeeded += 1,
                Err(e) => {
                    warn!(%greenhouse, %plan, %e, "Plan simulation failed");
                    report.failed.push((greenhouse, plan, e));
                }
            }
        }

        info!(succeeded = report.succeeded, failed = report.failed.len(), "All plans simulated");
        report
    }

    /// Stored result of a previous run, if any.
    pub fn result(&self, greenhouse: &str, plan: &str) -> Option<&SimulationResult> {
        self.results.get(&(greenhouse.to_owned(), plan.to_owned()))
    }

    /// Every stored result, ordered by `(greenhouse, plan)` name.
    pub fn results(&self) -> impl Iterator<Item = &SimulationResult> {
        self.results.values()
    }
}
