//! `gh-greenhouse`: the greenhouse aggregate consumed by the simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`plant`]       | `Plant`                                                   |
//! | [`drone`]       | `Drone`, `DroneStatus`, `DroneSpec`                       |
//! | [`greenhouse`]  | `Greenhouse` (ordered drones, indexed plants, plans)      |
//! | [`builder`]     | `GreenhouseBuilder` (fluent, validating construction)     |
//! | [`config`]      | `Configuration`: global drone registry + greenhouses     |
//! | [`error`]       | `GreenhouseError`, `GreenhouseResult<T>`                  |
//!
//! # Invariants enforced at build time
//!
//! - at most one plant per `(row, position)`;
//! - at most one drone per row (rows are disjoint lanes);
//! - drone and plan names are unique within a greenhouse.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `serde`   | Derives `Serialize` on all public data types.              |
//! | `fx-hash` | FxHash instead of SipHash for the plant index.             |

pub mod builder;
pub mod config;
pub mod drone;
pub mod error;
pub mod greenhouse;
pub mod plant;


pub use builder::GreenhouseBuilder;
pub use config::Configuration;
pub use drone::{Drone, DroneSpec, DroneStatus};
pub use error::{GreenhouseError, GreenhouseResult};
pub use greenhouse::Greenhouse;
pub use plant::Plant;
