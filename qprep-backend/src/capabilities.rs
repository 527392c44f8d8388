//! Backend capabilities and constraints

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Capabilities of a state-construction backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendCapabilities {
    /// Maximum number of qubits supported
    pub max_qubits: usize,

    /// Maximum number of measurement shots per request (None = unlimited)
    pub max_shots: Option<usize>,

    /// Whether the committed amplitudes can be read back from a handle
    pub supports_statevector_access: bool,

    /// Whether the backend can sample measurement outcomes
    pub supports_sampling: bool,

    /// Execution cost per shot (in credits, if applicable)
    pub cost_per_shot: Option<f64>,

    /// Backend-specific metadata
    pub metadata: HashMap<String, String>,
}

impl Default for BackendCapabilities {
    fn default() -> Self {
        Self {
            max_qubits: 26, // dense Complex64 vector, ~1 GiB at the ceiling
            max_shots: None,
            supports_statevector_access: true,
            supports_sampling: true,
            cost_per_shot: None,
            metadata: HashMap::new(),
        }
    }
}

impl BackendCapabilities {
    /// Create capabilities for a perfect local simulator
    pub fn simulator() -> Self {
        Self::default()
    }

    /// Create capabilities for a hardware device
    ///
    /// Hardware exposes no statevector and charges per shot.
    pub fn hardware(num_qubits: usize, cost_per_shot: f64) -> Self {
        Self {
            max_qubits: num_qubits,
            max_shots: Some(100_000),
            supports_statevector_access: false,
            supports_sampling: true,
            cost_per_shot: Some(cost_per_shot),
            metadata: HashMap::new(),
        }
    }

    /// Check whether a qubit count fits this backend
    pub fn supports_qubits(&self, num_qubits: usize) -> bool {
        num_qubits <= self.max_qubits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_capabilities() {
        let caps = BackendCapabilities::simulator();
        assert!(caps.supports_statevector_access);
        assert!(caps.supports_sampling);
        assert_eq!(caps.cost_per_shot, None);
    }

    #[test]
    fn test_hardware_capabilities() {
        let caps = BackendCapabilities::hardware(127, 0.00003);
        assert_eq!(caps.max_qubits, 127);
        assert!(!caps.supports_statevector_access);
        assert_eq!(caps.cost_per_shot, Some(0.00003));
    }

    #[test]
    fn test_supports_qubits() {
        let caps = BackendCapabilities {
            max_qubits: 5,
            ..Default::default()
        };
        assert!(caps.supports_qubits(5));
        assert!(!caps.supports_qubits(6));
    }

    #[test]
    fn test_serialization_round_trip() {
        let caps = BackendCapabilities::simulator();
        let json = serde_json::to_string(&caps).unwrap();
        let back: BackendCapabilities = serde_json::from_str(&json).unwrap();
        assert_eq!(back.max_qubits, caps.max_qubits);
    }
}
