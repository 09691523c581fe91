use gh_core::Location;
use gh_plan::PlanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("task #{task_index} ({task}) targets row {row}, which has no assigned drone")]
    UnassignedRow {
        row:        u32,
        task_index: usize,
        task:       Location,
    },

    #[error("run exceeded the configured limit of {limit} ticks")]
    TickLimitExceeded { limit: u64 },

    #[error("greenhouse {0:?} not found")]
    UnknownGreenhouse(String),

    #[error("plan {plan:?} not found in greenhouse {greenhouse:?}")]
    UnknownPlan {
        greenhouse: String,
        plan:       String,
    },

    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
}

pub type SimResult<T> = Result<T, SimError>;
