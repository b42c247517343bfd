//! Error types for hydro-output.

use hydro_core::{CoreError, VarId};
use thiserror::Error;

/// Errors that can occur when configuring a stream file or writing a record.
///
/// Every variant except `Io` is raised before the first byte of a record is
/// written, so a rejected call leaves the sink untouched.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Unrecognized OUT_FORMAT option: {0:?}")]
    UnsupportedFormat(String),

    #[error("unrecognized output data type {0:?}")]
    UnsupportedType(String),

    #[error("invalid text format {descriptor:?}: {reason}")]
    BadTextFormat {
        descriptor: String,
        reason:     &'static str,
    },

    #[error("stream has {got} variables but the file target expects {expected}")]
    VariableCountMismatch { expected: usize, got: usize },

    #[error("stream variable {index} is {got}, file target expects {expected}")]
    VariableIdMismatch {
        index:    usize,
        expected: VarId,
        got:      VarId,
    },

    #[error("{id} has {got} elements, metadata declares {expected}")]
    ElementCountMismatch {
        id:       VarId,
        expected: usize,
        got:      usize,
    },

    #[error("{id} element {element} carries no aggregated value")]
    EmptyAggregate { id: VarId, element: usize },

    #[error("{id} has {nelem} elements, exceeding the working buffer capacity {capacity}")]
    CapacityExceeded {
        id:       VarId,
        nelem:    usize,
        capacity: usize,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
