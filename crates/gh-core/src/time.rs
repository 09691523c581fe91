//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! simulated second: every drone performs exactly one action per tick.
//!
//! Tick 0 is "before the run".  The first executed step is tick 1, so after
//! a run the clock's current tick equals the number of steps taken.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter (one tick = one second).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The run clock.  Starts at tick 0 and is advanced once per step.
#[derive(Clone, Debug, Default)]
pub struct SimClock {
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Rewind to tick 0 for a fresh run.
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    /// Break elapsed time into (hours, minutes, seconds) for the run log.
    pub fn elapsed_hms(&self) -> (u64, u32, u32) {
        let total = self.current_tick.0;
        let hours = total / 3_600;
        let minutes = ((total % 3_600) / 60) as u32;
        let seconds = (total % 60) as u32;
        (hours, minutes, seconds)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.elapsed_hms();
        write!(f, "{} ({h}:{m:02}:{s:02})", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Per-run simulation settings.
///
/// Typically built in code or loaded from a JSON/TOML file by the
/// application crate (enable the `serde` feature).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Hard upper bound on executed ticks.  `None` means unbounded; a run
    /// whose plan passed binding validation always terminates on its own.
    pub max_ticks: Option<u64>,

    /// Append one terminal tick after the plan drains in which every drone
    /// decides `finish`.  The extra tick is logged in the timeline but not
    /// counted in `total_time`.  Off by default.
    pub emit_finish_tick: bool,
}

impl SimConfig {
    /// `true` once `tick` is past the configured cap.
    #[inline]
    pub fn exceeds_limit(&self, tick: Tick) -> bool {
        self.max_ticks.is_some_and(|max| tick.0 > max)
    }
}
