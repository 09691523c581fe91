//! `gh-plan`: irrigation plans and the task queue they drive.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`queue`]   | `TaskQueue<T>` (`VecDeque`-backed FIFO)                   |
//! | [`plan`]    | `IrrigationPlan` (canonical, immutable), `PlanRun` (per-run cursor) |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                              |
//!
//! # Plan string format
//!
//! ```text
//! H1-P2, H2-P1 ,H2-P2,, H3-P3
//! ```
//!
//! Comma-separated `H<row>-P<position>` tokens.  Whitespace anywhere is
//! ignored and empty tokens are skipped; order is preserved left to right.
//! Any other token is rejected when the plan is constructed, so a malformed
//! plan can never reach the simulator.

pub mod error;
pub mod plan;
pub mod queue;

#[cfg(test)]
mod tests;

pub use error::{PlanError, PlanResult};
pub use plan::{IrrigationPlan, PlanRun};
pub use queue::TaskQueue;
