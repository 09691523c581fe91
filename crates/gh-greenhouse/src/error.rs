use gh_core::{DroneId, Location};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreenhouseError {
    #[error("greenhouse {greenhouse:?}: more than one plant at {location}")]
    DuplicatePlant {
        greenhouse: String,
        location:   Location,
    },

    #[error("greenhouse {greenhouse:?}: row {row} is already assigned to drone {existing:?}")]
    DuplicateRowAssignment {
        greenhouse: String,
        row:        u32,
        existing:   String,
    },

    #[error("greenhouse {greenhouse:?}: drone {name:?} registered twice")]
    DuplicateDrone {
        greenhouse: String,
        name:       String,
    },

    #[error("greenhouse {greenhouse:?}: plan {name:?} registered twice")]
    DuplicatePlan {
        greenhouse: String,
        name:       String,
    },

    #[error("drone {0} is not in the configuration's drone registry")]
    UnknownDrone(DroneId),

    #[error("configuration already contains {kind} {name:?}")]
    DuplicateEntry {
        kind: &'static str,
        name: String,
    },
}

pub type GreenhouseResult<T> = Result<T, GreenhouseError>;
