//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a core
//! operation (such as location parsing) can fail underneath them.

use thiserror::Error;

/// Errors raised by `gh-core` primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("malformed location {token:?}: {reason}")]
    MalformedLocation {
        token:  String,
        reason: &'static str,
    },
}

/// Shorthand result type for `gh-core`.
pub type CoreResult<T> = Result<T, CoreError>;
