//! Error types for backend operations

use thiserror::Error;

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors that can occur during backend operations
///
/// These describe failures internal to a backend. When a backend rejects an
/// otherwise-valid request, the preparation pipeline wraps the diagnostic
/// into [`qprep_core::PrepError::StatePreparation`] before surfacing it.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Backend capability exceeded
    #[error("Backend capability exceeded: {0}")]
    CapabilityExceeded(String),

    /// Amplitude count inconsistent with the requested qubit count
    #[error("Dimension mismatch: expected {expected} amplitudes for {num_qubits} qubit(s), got {actual}")]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        num_qubits: usize,
    },

    /// Backend not available
    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    /// Operation not supported by this backend
    #[error("Operation not supported by backend '{backend}': {operation}")]
    Unsupported { backend: String, operation: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        BackendError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = BackendError::DimensionMismatch {
            expected: 4,
            actual: 8,
            num_qubits: 2,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("4"));
        assert!(msg.contains("8"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_unsupported_message() {
        let err = BackendError::Unsupported {
            backend: "remote".to_string(),
            operation: "sample".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("remote"));
        assert!(msg.contains("sample"));
    }
}
