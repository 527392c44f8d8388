//! Core backend trait and types

use crate::{BackendCapabilities, BackendError, PreparedState, Result};
use qprep_core::{NormalizedAmplitudes, QubitCount};
use std::collections::HashMap;
use std::fmt;

/// Trait for quantum state-construction backends
///
/// This trait provides a unified interface for committing a normalized
/// amplitude vector to different execution targets, including local
/// simulators and real quantum hardware.
///
/// Implementations receive amplitudes that already passed dimension
/// validation and normalization; the only checks a backend performs are its
/// own internal-consistency and capability checks.
///
/// # Example
///
/// ```no_run
/// use qprep_backend::{PreparedState, StateBackend};
/// use qprep_core::{NormalizedAmplitudes, QubitCount};
///
/// fn commit<B: StateBackend>(
///     backend: &B,
///     amplitudes: &NormalizedAmplitudes,
///     qubits: QubitCount,
/// ) -> PreparedState {
///     backend.load_state(amplitudes, qubits).expect("Load failed")
/// }
/// ```
pub trait StateBackend: Send + Sync {
    /// Get the backend name
    fn name(&self) -> &str;

    /// Get backend type
    fn backend_type(&self) -> BackendType;

    /// Get backend capabilities
    fn capabilities(&self) -> &BackendCapabilities;

    /// Construct an n-qubit state from normalized amplitudes
    ///
    /// # Arguments
    ///
    /// * `amplitudes` - The normalized amplitude vector to commit
    /// * `qubits` - Qubit count of the requested state; backends cross-check
    ///   it against the amplitude count
    ///
    /// # Returns
    ///
    /// An opaque [`PreparedState`] handle owned by the caller
    fn load_state(
        &self,
        amplitudes: &NormalizedAmplitudes,
        qubits: QubitCount,
    ) -> Result<PreparedState>;

    /// Sample measurement outcomes from a prepared state (optional)
    ///
    /// Returns measurement counts keyed by basis-state bitstring.
    fn sample(&self, _state: &PreparedState, _shots: usize) -> Result<HashMap<String, usize>> {
        Err(BackendError::Unsupported {
            backend: self.name().to_string(),
            operation: "sample".to_string(),
        })
    }

    /// Check if the backend is available
    fn is_available(&self) -> bool {
        true
    }

    /// Validate that a request fits the backend's capability ceilings
    fn validate_request(&self, qubits: QubitCount) -> Result<()> {
        let caps = self.capabilities();

        if !caps.supports_qubits(qubits.count()) {
            return Err(BackendError::CapabilityExceeded(format!(
                "State requires {} qubits, backend supports max {}",
                qubits.count(),
                caps.max_qubits
            )));
        }

        Ok(())
    }

    /// Get backend description/status
    fn description(&self) -> String {
        format!(
            "{} ({}) - up to {} qubits",
            self.name(),
            self.backend_type(),
            self.capabilities().max_qubits
        )
    }
}

/// Backend type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Local statevector simulator
    Simulator,

    /// Cloud simulator
    CloudSimulator,

    /// Real quantum hardware
    Hardware,
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendType::Simulator => write!(f, "Simulator"),
            BackendType::CloudSimulator => write!(f, "Cloud Simulator"),
            BackendType::Hardware => write!(f, "Hardware"),
        }
    }
}
