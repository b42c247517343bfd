//! Core error type.
//!
//! `hydro-output` wraps `CoreError` as one variant of its own error enum.

use thiserror::Error;

use crate::VarId;

/// Errors raised while building or querying core configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown output variable {0:?}")]
    UnknownVariable(String),

    #[error("{0} is not registered in the output metadata")]
    VarNotFound(VarId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `hydro-core`.
pub type CoreResult<T> = Result<T, CoreError>;
