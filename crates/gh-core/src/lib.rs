//! `gh-core`: foundational types for the greenhouse irrigation simulator.
//!
//! This crate is a dependency of every other `gh-*` crate.  It has no `gh-*`
//! dependencies and a single required external one (`thiserror`), plus
//! optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `DroneId`                                             |
//! | [`location`]    | `Location`: the `H<row>-P<position>` grid address    |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod location;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::DroneId;
pub use location::Location;
pub use time::{SimClock, SimConfig, Tick};
