//! Prepared state handle and metadata

use num_complex::Complex64;
use qprep_core::QubitCount;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Opaque handle to a state committed to a backend
///
/// Produced once per successful preparation; ownership transfers to the
/// caller on return and the handle is never mutated afterwards. Backends that
/// expose statevector access keep the committed amplitudes readable through
/// [`amplitudes`](PreparedState::amplitudes).
#[derive(Debug, Clone)]
pub struct PreparedState {
    id: Uuid,
    backend_name: String,
    qubits: QubitCount,
    amplitudes: Vec<Complex64>,
    metadata: PreparationMetadata,
}

impl PreparedState {
    /// Create a prepared state handle
    ///
    /// Called by [`StateBackend`](crate::StateBackend) implementations once
    /// the state has been committed.
    pub fn new(
        backend_name: String,
        qubits: QubitCount,
        amplitudes: Vec<Complex64>,
        metadata: PreparationMetadata,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            backend_name,
            qubits,
            amplitudes,
            metadata,
        }
    }

    /// Unique identifier assigned at preparation time
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the backend that constructed the state
    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// Qubit count of the state
    pub fn num_qubits(&self) -> QubitCount {
        self.qubits
    }

    /// State dimension (2^n)
    pub fn dimension(&self) -> usize {
        self.qubits.dimension()
    }

    /// The committed amplitudes, in binary-index basis order
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Measurement probabilities |aᵢ|² per basis state
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Bitstring label of a basis-state index, e.g. `|011⟩` has label "011"
    pub fn basis_label(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.qubits.count())
    }

    /// Preparation metadata
    pub fn metadata(&self) -> &PreparationMetadata {
        &self.metadata
    }
}

impl fmt::Display for PreparedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PreparedState({}, {} qubit(s) on '{}')",
            self.id,
            self.qubits.count(),
            self.backend_name
        )
    }
}

/// Metadata recorded when a state is prepared
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreparationMetadata {
    /// Wall-clock time the backend spent constructing the state
    pub preparation_time: Option<Duration>,

    /// Backend version
    pub backend_version: Option<String>,

    /// Whether the input amplitudes were rescaled to reach unit norm
    pub was_rescaled: Option<bool>,

    /// Sum of squared magnitudes of the input as supplied
    pub input_norm_sqr: Option<f64>,

    /// Additional backend-specific data
    pub extra: HashMap<String, String>,
}

impl PreparationMetadata {
    /// Create metadata for a successful preparation
    pub fn success(preparation_time: Duration) -> Self {
        Self {
            preparation_time: Some(preparation_time),
            ..Default::default()
        }
    }

    /// Record the normalization outcome
    pub fn with_normalization(mut self, was_rescaled: bool, input_norm_sqr: f64) -> Self {
        self.was_rescaled = Some(was_rescaled);
        self.input_norm_sqr = Some(input_norm_sqr);
        self
    }

    /// Record the backend version
    pub fn with_backend_version(mut self, version: impl Into<String>) -> Self {
        self.backend_version = Some(version.into());
        self
    }
}
