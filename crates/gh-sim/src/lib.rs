//! `gh-sim`: tick loop orchestrator for the greenhouse irrigation simulator.
//!
//! # Two-phase tick loop
//!
//! ```text
//! validate: every task row has a drone bound to it   (else UnassignedRow)
//! reset:    every drone → (position 0, idle); fresh plan run, stats, timeline
//! while the plan run is not completed:
//!   t += 1
//!   ① Peek   : head = the single globally-next task
//!   ② Decide : every drone picks one action from (row, position, head)
//!               only (parallel with the `parallel` feature)
//!   ③ Record : all actions go into timeline[t], in drone order
//!   ④ Execute: apply each action; an `irrigate` adds the plant's water and
//!               fertilizer to that drone's stats and dequeues the head task
//! total_time = t
//! ```
//!
//! The decide/execute barrier is what keeps results independent of drone
//! order: a dequeue in ④ can never influence a decision taken in ② of the
//! same tick.  Only the drone owning the head task's row can irrigate, so at
//! most one task completes per tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the decide phase on Rayon's thread pool.          |
//! | `serde`    | Serde derives on results, timeline, and actions.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gh_sim::{NoopObserver, SimBuilder};
//!
//! let plan = greenhouse.plan_by_name("Dia 1").unwrap().clone();
//! let mut sim = SimBuilder::new(&mut greenhouse).build()?;
//! let result = sim.run(&plan, &mut NoopObserver)?;
//! println!("{} s, {} L", result.total_time().0, result.total_water());
//! ```

pub mod action;
pub mod builder;
pub mod decide;
pub mod error;
pub mod observer;
pub mod result;
pub mod service;
pub mod sim;
pub mod snapshot;
pub mod stats;
pub mod timeline;


pub use action::{ActionKind, DroneAction};
pub use builder::SimBuilder;
pub use decide::decide_action;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use result::SimulationResult;
pub use service::{IrrigationService, SimulateAllReport};
pub use sim::Simulator;
pub use snapshot::RunSnapshot;
pub use stats::{DroneStatistics, IrrigationRecord};
pub use timeline::Timeline;
