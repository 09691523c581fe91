//! The per-drone decision rule.
//!
//! A decision looks at three things only: the drone's assigned row, its
//! current position, and the head task.  It never sees the rest of the
//! queue, so a drone whose row doesn't match the head task waits even when
//! it has work further down the plan.

use gh_core::Location;
use gh_greenhouse::Drone;

use crate::DroneAction;

/// Decide what `drone` does this tick given the `head` task.
///
/// | Condition                               | Action          |
/// |-----------------------------------------|-----------------|
/// | no head task                            | `finish`        |
/// | drone has no assigned row               | `wait`          |
/// | head row ≠ assigned row                 | `wait`          |
/// | position == head position               | `irrigate`      |
/// | position < head position                | `move_forward`  |
/// | position > head position                | `move_backward` |
pub fn decide_action(drone: &Drone, head: Option<Location>) -> DroneAction {
    let Some(task) = head else {
        return DroneAction::finish(drone);
    };

    let Some(row) = drone.assigned_row() else {
        return DroneAction::wait(drone);
    };

    if task.row != row {
        return DroneAction::wait(drone);
    }

    let position = drone.position();
    if position == task.position {
        DroneAction::irrigate(drone)
    } else if position < task.position {
        DroneAction::move_forward(drone, Location::new(row, position + 1))
    } else {
        DroneAction::move_backward(drone, Location::new(row, position - 1))
    }
}

/// Decide phase: one action per drone, in drone order.
///
/// Pure with respect to simulation state; with the `parallel` feature the
/// drones are evaluated on Rayon's pool and collected back in order.
pub fn decide_all(drones: &[Drone], head: Option<Location>) -> Vec<DroneAction> {
    #[cfg(not(feature = "parallel"))]
    {
        drones.iter().map(|d| decide_action(d, head)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        drones.par_iter().map(|d| decide_action(d, head)).collect()
    }
}
