//! State preparation pipeline
//!
//! Composes the pure numeric stages from `qprep-core` with a backend:
//! raw amplitudes → dimension check → normalization → backend load. Each
//! stage fails fast; the pipeline is stateless and request-scoped, so
//! concurrent callers can share one preparer without coordination.

use crate::{PreparedState, StateBackend};
use qprep_core::{
    AmplitudeVector, Complex64, NormalizedAmplitudes, Normalizer, NormalizerConfig, PrepError,
    QubitCount, Result as PrepResult,
};

/// Result of a successful preparation
///
/// Carries both the normalized amplitude vector (for display and further
/// numeric inspection) and the backend's opaque state handle.
#[derive(Debug, Clone)]
pub struct PreparationResult {
    /// The validated, unit-norm amplitude vector handed to the backend
    pub normalized: NormalizedAmplitudes,

    /// Opaque handle to the state the backend constructed
    pub state: PreparedState,
}

impl PreparationResult {
    /// Qubit count of the prepared state
    pub fn num_qubits(&self) -> QubitCount {
        self.normalized.num_qubits()
    }

    /// Whether the input needed rescaling
    pub fn was_rescaled(&self) -> bool {
        self.normalized.was_rescaled()
    }
}

/// Full amplitude-to-state preparation pipeline
///
/// # Example
///
/// ```
/// use qprep_backend::{LocalStateVectorBackend, StatePreparer};
/// use qprep_core::Complex64;
///
/// let preparer = StatePreparer::new(LocalStateVectorBackend::new());
/// let amplitudes = vec![Complex64::new(1.0, 0.0); 4];
///
/// let result = preparer.prepare_raw(amplitudes).unwrap();
/// assert_eq!(result.num_qubits().count(), 2);
/// assert!(result.was_rescaled());
/// ```
pub struct StatePreparer<B: StateBackend> {
    backend: B,
    normalizer: Normalizer,
}

impl<B: StateBackend> StatePreparer<B> {
    /// Create a preparer with default normalization tolerances
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, NormalizerConfig::default())
    }

    /// Create a preparer with custom normalization tolerances
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn with_config(backend: B, config: NormalizerConfig) -> Self {
        Self {
            backend,
            normalizer: Normalizer::new(config),
        }
    }

    /// Get the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get the normalizer
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Prepare a state from raw amplitude values
    ///
    /// Runs the full pipeline. The dimension check happens first, before any
    /// normalization work.
    ///
    /// # Errors
    ///
    /// - [`PrepError::InvalidDimension`] when the value count is not a
    ///   positive power of two
    /// - [`PrepError::ZeroVector`] when the squared norm is below epsilon
    /// - [`PrepError::StatePreparation`] when the backend rejects the request
    pub fn prepare_raw(&self, amplitudes: Vec<Complex64>) -> PrepResult<PreparationResult> {
        let vector = AmplitudeVector::new(amplitudes)?;
        self.prepare(vector)
    }

    /// Prepare a state from a dimension-checked amplitude vector
    pub fn prepare(&self, vector: AmplitudeVector) -> PrepResult<PreparationResult> {
        let qubits = vector.num_qubits();
        tracing::debug!(
            qubits = qubits.count(),
            backend = self.backend.name(),
            "preparing state"
        );

        let normalized = self.normalizer.normalize(vector)?;

        let state = self
            .backend
            .load_state(&normalized, qubits)
            .map_err(|e| PrepError::state_preparation(self.backend.name(), e.to_string()))?;

        Ok(PreparationResult { normalized, state })
    }
}
