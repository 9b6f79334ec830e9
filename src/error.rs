//! Error types for chain optimization.
//!
//! All validation happens at the boundary: either a dimension sequence is
//! accepted and the full table build runs to completion, or nothing is built.
//! There is no partial or recoverable table state.

use thiserror::Error;

/// Errors reported by the optimizer and the reconstructor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The dimension sequence is malformed: fewer than two entries, or a
    /// non-positive dimension. Detected before any table work starts.
    #[error("invalid dimension sequence: {reason}")]
    InvalidInput { reason: String },

    /// Reconstruction was asked for an inverted or out-of-bounds interval.
    #[error("invalid interval [{lo}, {hi}] for a chain of {n} matrices")]
    InvalidRange { lo: usize, hi: usize, n: usize },
}

impl ChainError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        ChainError::InvalidInput {
            reason: reason.into(),
        }
    }
}
