//! Error types for state preparation

use thiserror::Error;

/// Errors that can occur while preparing a quantum state
///
/// Each variant is raised at the point of detection and propagates unhandled
/// to the immediate caller; callers branch on the variant, not on message
/// text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PrepError {
    /// Amplitude count is not a positive power of two
    #[error("Invalid amplitude count {count}: required length is 2^n for some integer n≥0")]
    InvalidDimension { count: usize },

    /// Sum of squared magnitudes is below the degeneracy threshold
    #[error(
        "Cannot normalize a zero vector: sum of squared magnitudes {norm_sqr:.3e} is below epsilon {epsilon:.3e}"
    )]
    ZeroVector { norm_sqr: f64, epsilon: f64 },

    /// The external backend could not construct the state
    #[error("State preparation failed on backend '{backend}': {reason}")]
    StatePreparation { backend: String, reason: String },
}

impl PrepError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(count: usize) -> Self {
        Self::InvalidDimension { count }
    }

    /// Create a zero vector error
    pub fn zero_vector(norm_sqr: f64, epsilon: f64) -> Self {
        Self::ZeroVector { norm_sqr, epsilon }
    }

    /// Wrap a backend diagnostic into a preparation error
    pub fn state_preparation(backend: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::StatePreparation {
            backend: backend.into(),
            reason: reason.into(),
        }
    }
}
