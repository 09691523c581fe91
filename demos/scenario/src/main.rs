//! scenario: runnable demo for the greenhouse irrigation simulator.
//!
//! Registers three drones, builds two greenhouses with a few plans each,
//! simulates every plan, and writes CSV output to `output/scenario`.
//!
//! Usage: `scenario [sim_config.json]`.  The optional JSON file holds a
//! `SimConfig`, e.g. `{"max_ticks": 500, "emit_finish_tick": true}`.
//! Set `RUST_LOG=debug` to see every completed task.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gh_core::{DroneId, Location, SimConfig, Tick};
use gh_greenhouse::{Configuration, DroneSpec, Greenhouse, GreenhouseBuilder, Plant};
use gh_output::{CsvWriter, SimOutputObserver};
use gh_plan::IrrigationPlan;
use gh_sim::IrrigationService;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR: &str = "output/scenario";

// ── Configuration ─────────────────────────────────────────────────────────────

fn build_configuration() -> Result<Configuration> {
    let mut config = Configuration::new();
    for (id, name) in [(1, "DR01"), (2, "DR02"), (3, "DR03")] {
        config.add_drone(DroneSpec::new(DroneId(id), name))?;
    }

    let norte = norte(&config)?;
    let sur = sur(&config)?;
    config.add_greenhouse(norte)?;
    config.add_greenhouse(sur)?;
    Ok(config)
}

/// Two rows, two drones: the reference "H1-P2, H2-P1" layout plus extras.
fn norte(config: &Configuration) -> Result<Greenhouse> {
    let greenhouse = GreenhouseBuilder::new("Norte", 2, 3)
        .plants([
            Plant::new(Location::new(1, 1), 1.5, 80.0, "tomate"),
            Plant::new(Location::new(1, 2), 2.0, 100.0, "tomate"),
            Plant::new(Location::new(1, 3), 1.0, 60.0, "chile"),
            Plant::new(Location::new(2, 1), 1.0, 50.0, "lechuga"),
            Plant::new(Location::new(2, 2), 0.5, 30.0, "lechuga"),
        ])
        .assign_drone(config.spec(DroneId(1))?, 1)
        .assign_drone(config.spec(DroneId(2))?, 2)
        .plan(IrrigationPlan::new("Dia 1", "H1-P2, H2-P1")?)
        .plan(IrrigationPlan::new("Dia 2", "H1-P3, H2-P2, H1-P1, H2-P1, H1-P2")?)
        .build()?;
    Ok(greenhouse)
}

/// Three rows, one spare row without a drone; plan "Fallido" targets it.
fn sur(config: &Configuration) -> Result<Greenhouse> {
    let greenhouse = GreenhouseBuilder::new("Sur", 3, 4)
        .plants((1..=4).flat_map(|p| {
            [
                Plant::new(Location::new(1, p), 0.75, 25.0, "fresa"),
                Plant::new(Location::new(2, p), 1.25, 40.0, "pepino"),
            ]
        }))
        .assign_drone(config.spec(DroneId(3))?, 1)
        .assign_drone(config.spec(DroneId(1))?, 2)
        .plan(IrrigationPlan::new("Semana", "H1-P4, H2-P4, H1-P1, H2-P2")?)
        .plan(IrrigationPlan::new("Fallido", "H3-P1")?)
        .build()?;
    Ok(greenhouse)
}

fn load_sim_config() -> Result<SimConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(SimConfig::default());
    };
    let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    println!("=== scenario: greenhouse irrigation simulator ===");

    let sim_config = load_sim_config()?;
    let config = build_configuration()?;
    info!(
        drones = config.drones().len(),
        greenhouses = config.greenhouses().len(),
        ?sim_config,
        "Configuration loaded"
    );

    let mut service = IrrigationService::with_sim_config(config, sim_config);

    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = SimOutputObserver::new(writer);

    let t0 = Instant::now();
    let report = service.simulate_all_with(&mut obs);
    let elapsed = t0.elapsed();

    obs.finish();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "Simulated {} plan(s) in {:.3} ms, {} failed",
        report.succeeded,
        elapsed.as_secs_f64() * 1e3,
        report.failed.len()
    );
    for (greenhouse, plan, e) in &report.failed {
        println!("  {greenhouse}/{plan}: {e}");
    }
    println!();

    // Summary table.
    println!(
        "{:<8} {:<8} {:>6} {:>10} {:>14} {:>6}",
        "House", "Plan", "Secs", "Water (L)", "Fertilizer (g)", "Tasks"
    );
    println!("{}", "-".repeat(57));
    for result in service.results() {
        println!(
            "{:<8} {:<8} {:>6} {:>10.2} {:>14.2} {:>6}",
            result.greenhouse_name(),
            result.plan_name(),
            result.total_time().0,
            result.total_water(),
            result.total_fertilizer(),
            result.tasks_completed(),
        );
    }
    println!();

    if let Some(result) = service.result("Norte", "Dia 1") {
        print!("{}", result.timeline());
        for s in result.drone_statistics() {
            println!(
                "  {:<6} {:>6.2} L {:>8.2} g {:>3} plant(s)",
                s.drone_name, s.water_used, s.fertilizer_used, s.plants_irrigated
            );
        }

        let midway = Tick(result.total_time().0 / 2);
        print!("\n{}", result.snapshot_at(midway));

        let json_path = Path::new(OUTPUT_DIR).join("norte_dia1.json");
        fs::write(&json_path, serde_json::to_string_pretty(result)?)?;
        println!("\nResult written to {}", json_path.display());
    }

    Ok(())
}
