use gh_core::CoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("task #{index} ({token:?}) is malformed: {source}")]
    MalformedTask {
        index:  usize,
        token:  String,
        #[source]
        source: CoreError,
    },

    #[error("dequeue on an empty task queue")]
    EmptyQueue,
}

pub type PlanResult<T> = Result<T, PlanError>;
