//! `Timeline`: the per-second action log of a run.
//!
//! Bucket `i` holds the actions of second `i`, in drone order.  Writing to a
//! second beyond the current extent grows the log with empty buckets, so the
//! seconds stay contiguous.  Reading a second that was never written returns
//! an empty slice.  Second 0 is "before the run" and is never written by the
//! simulator.

use std::fmt;

use gh_core::Tick;

use crate::DroneAction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    buckets:     Vec<Vec<DroneAction>>,
    max_seconds: Tick,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `action` to `second`'s bucket.
    pub fn add_action_to_second(&mut self, second: Tick, action: DroneAction) {
        self.bucket_mut(second).push(action);
    }

    /// Append a whole tick's worth of actions, preserving their order.
    pub fn record_second(&mut self, second: Tick, actions: impl IntoIterator<Item = DroneAction>) {
        self.bucket_mut(second).extend(actions);
    }

    /// Actions recorded at `second`; empty if nothing was recorded there.
    pub fn actions_at_second(&self, second: Tick) -> &[DroneAction] {
        self.buckets
            .get(second.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Highest second ever written; `Tick::ZERO` for an empty timeline.
    pub fn max_seconds(&self) -> Tick {
        self.max_seconds
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// `(second, actions)` for every second `1..=max_seconds`, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &[DroneAction])> + '_ {
        (1..=self.max_seconds.0).map(move |s| (Tick(s), self.actions_at_second(Tick(s))))
    }

    fn bucket_mut(&mut self, second: Tick) -> &mut Vec<DroneAction> {
        let idx = second.index();
        if self.buckets.len() <= idx {
            self.buckets.resize_with(idx + 1, Vec::new);
        }
        if second > self.max_seconds {
            self.max_seconds = second;
        }
        &mut self.buckets[idx]
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== timeline ({} s) ===", self.max_seconds.0)?;
        for (second, actions) in self.buckets.iter().enumerate() {
            if actions.is_empty() {
                continue;
            }
            write!(f, "second {second}:")?;
            for (i, action) in actions.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{action}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
