//! Drone actions: what each drone does during one tick.

use std::fmt;

use gh_core::{DroneId, Location};
use gh_greenhouse::Drone;

/// Description of an `irrigate` action.
pub const IRRIGATE_DESCRIPTION: &str = "Regar";
/// Description of a `wait` action.
pub const WAIT_DESCRIPTION: &str = "Esperar";
/// Description of a `finish` action.
pub const FINISH_DESCRIPTION: &str = "FIN";

/// The kind of step a drone takes in one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionKind {
    MoveForward,
    MoveBackward,
    Irrigate,
    Wait,
    Finish,
}

impl ActionKind {
    /// Stable snake_case name, used by output backends.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::MoveForward  => "move_forward",
            ActionKind::MoveBackward => "move_backward",
            ActionKind::Irrigate     => "irrigate",
            ActionKind::Wait         => "wait",
            ActionKind::Finish       => "finish",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One drone's action for one tick.
///
/// Produced in the decide phase, recorded in the [`Timeline`][crate::Timeline],
/// and consumed (read-only) by the execute phase.  Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroneAction {
    pub drone_id:    DroneId,
    pub drone_name:  String,
    pub kind:        ActionKind,
    /// Human-readable description: `"Regar"`, `"Esperar"`, `"FIN"`,
    /// `"Adelante (H{r}P{p})"` or `"Atrás (H{r}P{p})"`.
    pub description: String,
}

impl DroneAction {
    fn new(drone: &Drone, kind: ActionKind, description: String) -> Self {
        Self {
            drone_id: drone.id,
            drone_name: drone.name.clone(),
            kind,
            description,
        }
    }

    /// Step forward; `to` is the cell the drone will occupy afterwards.
    pub fn move_forward(drone: &Drone, to: Location) -> Self {
        Self::new(drone, ActionKind::MoveForward, format!("Adelante ({})", to.compact()))
    }

    /// Step backward; `to` is the cell the drone will occupy afterwards.
    pub fn move_backward(drone: &Drone, to: Location) -> Self {
        Self::new(drone, ActionKind::MoveBackward, format!("Atrás ({})", to.compact()))
    }

    pub fn irrigate(drone: &Drone) -> Self {
        Self::new(drone, ActionKind::Irrigate, IRRIGATE_DESCRIPTION.to_owned())
    }

    pub fn wait(drone: &Drone) -> Self {
        Self::new(drone, ActionKind::Wait, WAIT_DESCRIPTION.to_owned())
    }

    pub fn finish(drone: &Drone) -> Self {
        Self::new(drone, ActionKind::Finish, FINISH_DESCRIPTION.to_owned())
    }
}

impl fmt::Display for DroneAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.drone_name, self.description)
    }
}
