//! `gh-output`: simulation output writers for the greenhouse irrigation
//! simulator.
//!
//! | Backend | Files created                                                      |
//! |---------|--------------------------------------------------------------------|
//! | CSV     | `timeline.csv`, `plan_summaries.csv`, `drone_statistics.csv`       |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `gh_sim::SimObserver`.  One
//! writer can collect many runs: every row carries its greenhouse and plan
//! name.
//!
//! # Usage
//!
//! ```rust,ignore
//! use gh_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! service.simulate_all_with(&mut obs);
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ActionRow, DroneStatsRow, PlanSummaryRow};
pub use writer::OutputWriter;
