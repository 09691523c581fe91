//! Drones and their per-run state machine.
//!
//! ```text
//! Idle ──► Moving ──► Irrigating ──► … ──► Finished
//!   │        ▲  │          │
//!   └──► Waiting ◄─────────┘
//! ```
//!
//! A drone never decides anything on its own: the simulator picks an action
//! each tick and calls the matching transition method.  `reset_position`
//! puts the drone back at (position 0, `Idle`) before every run.

use std::fmt;

use gh_core::DroneId;

/// Run-time status of a drone.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DroneStatus {
    #[default]
    Idle,
    Moving,
    Irrigating,
    Waiting,
    Finished,
}

impl fmt::Display for DroneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DroneStatus::Idle       => "idle",
            DroneStatus::Moving     => "moving",
            DroneStatus::Irrigating => "irrigating",
            DroneStatus::Waiting    => "waiting",
            DroneStatus::Finished   => "finished",
        };
        f.write_str(s)
    }
}

/// A drone as declared in the configuration's global registry, before it is
/// bound to a row of any greenhouse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroneSpec {
    pub id:   DroneId,
    pub name: String,
}

impl DroneSpec {
    pub fn new(id: DroneId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A drone registered in one greenhouse.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Drone {
    pub id:           DroneId,
    pub name:         String,
    /// Row this drone serves.  `None` drones are inert: they wait every tick.
    assigned_row:     Option<u32>,
    position:         u32,
    status:           DroneStatus,
}

impl Drone {
    pub fn new(id: DroneId, name: impl Into<String>, assigned_row: Option<u32>) -> Self {
        Self {
            id,
            name: name.into(),
            assigned_row,
            position: 0,
            status: DroneStatus::Idle,
        }
    }

    #[inline]
    pub fn assigned_row(&self) -> Option<u32> {
        self.assigned_row
    }

    /// Current position along the assigned row.  Starts at 0.
    #[inline]
    pub fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    pub fn status(&self) -> DroneStatus {
        self.status
    }

    // ── Transitions (driven by the simulator) ─────────────────────────────

    pub fn move_forward(&mut self) {
        self.position += 1;
        self.status = DroneStatus::Moving;
    }

    /// Step back one position.  Position 0 is the row entrance; the drone
    /// stays there rather than underflowing.
    pub fn move_backward(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.status = DroneStatus::Moving;
    }

    pub fn irrigate(&mut self) {
        self.status = DroneStatus::Irrigating;
    }

    pub fn wait(&mut self) {
        self.status = DroneStatus::Waiting;
    }

    pub fn finish(&mut self) {
        self.status = DroneStatus::Finished;
    }

    /// Back to the row entrance, idle.  Called before every run.
    pub fn reset_position(&mut self) {
        self.position = 0;
        self.status = DroneStatus::Idle;
    }
}
