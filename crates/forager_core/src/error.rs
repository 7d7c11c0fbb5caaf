//! Error types for forager_core.

use std::time::Duration;
use thiserror::Error;

/// Errors raised at the simulation's call boundaries.
#[derive(Error, Debug, PartialEq)]
pub enum SimError {
    /// A sensory vector of the wrong length was handed to a policy.
    #[error("sensory input has {actual} values, policy expects {expected}")]
    InputLength { expected: usize, actual: usize },

    /// A policy was built from a weight matrix of the wrong size.
    #[error("weight matrix has {actual} entries, expected {expected}")]
    WeightShape { expected: usize, actual: usize },

    /// The tick task did not stop within the bounded wait.
    #[error("simulation task did not stop within {0:?}")]
    ShutdownTimeout(Duration),

    /// The tick task ended abnormally.
    #[error("simulation task failed: {0}")]
    TaskFailed(String),
}

/// Result type alias for forager_core operations.
pub type Result<T> = std::result::Result<T, SimError>;
