//! Amplitude normalization
//!
//! Normalization rescales amplitudes so the sum of their squared magnitudes
//! equals 1, as required for a physically valid quantum state. Rescaling is
//! lossless re-proportioning: relative phases and relative magnitudes between
//! amplitudes are preserved exactly, only the overall scale changes.

use crate::amplitude::{AmplitudeVector, NormalizedAmplitudes};
use crate::config::NormalizerConfig;
use crate::error::PrepError;
use crate::Result;
use std::fmt;

/// Norm diagnostics for an amplitude vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationReport {
    /// Sum of squared magnitudes Σ|aᵢ|²
    pub norm_sqr: f64,

    /// Deviation of the squared norm from 1.0
    pub norm_error: f64,

    /// Whether the vector is numerically all-zero (norm below epsilon)
    pub degenerate: bool,

    /// Whether the vector already has unit norm within tolerance
    pub unit_norm: bool,
}

impl NormalizationReport {
    /// Whether normalization would rescale this vector
    pub fn needs_rescaling(&self) -> bool {
        !self.degenerate && !self.unit_norm
    }
}

impl fmt::Display for NormalizationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NormalizationReport(norm_sqr={:.6}, error={:.2e}, degenerate={})",
            self.norm_sqr, self.norm_error, self.degenerate
        )
    }
}

/// Amplitude normalizer
///
/// A pure function of its input and configuration: no side effects, no state
/// between calls. Concurrent callers may use one normalizer freely.
///
/// # Example
/// ```
/// use qprep_core::{AmplitudeVector, Normalizer};
///
/// let amps = AmplitudeVector::from_real(&[1.0, 1.0, 1.0, 1.0]).unwrap();
/// let normalized = Normalizer::default().normalize(amps).unwrap();
/// assert!((normalized.as_slice()[0].re - 0.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl Normalizer {
    /// Create a normalizer with the given configuration
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn new(config: NormalizerConfig) -> Self {
        config.validate().expect("Invalid normalizer configuration");

        Self { config }
    }

    /// Get the normalizer configuration
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Inspect a vector's norm without consuming it
    pub fn inspect(&self, vector: &AmplitudeVector) -> NormalizationReport {
        let norm_sqr = vector.norm_sqr();
        NormalizationReport {
            norm_sqr,
            norm_error: (norm_sqr - 1.0).abs(),
            degenerate: norm_sqr <= self.config.zero_epsilon,
            unit_norm: (norm_sqr - 1.0).abs() <= self.config.norm_tolerance,
        }
    }

    /// Normalize an amplitude vector to unit norm
    ///
    /// - A numerically all-zero vector is rejected: it cannot represent a
    ///   physical state, and dividing by a near-zero norm would blow up or
    ///   produce NaNs.
    /// - A vector already within tolerance of unit norm passes through
    ///   unchanged.
    /// - Anything else is rescaled by 1/√(Σ|aᵢ|²).
    ///
    /// # Errors
    /// Returns [`PrepError::ZeroVector`] when the squared norm is at or below
    /// the configured epsilon.
    pub fn normalize(&self, vector: AmplitudeVector) -> Result<NormalizedAmplitudes> {
        let norm_sqr = vector.norm_sqr();

        if norm_sqr <= self.config.zero_epsilon {
            return Err(PrepError::zero_vector(norm_sqr, self.config.zero_epsilon));
        }

        if (norm_sqr - 1.0).abs() <= self.config.norm_tolerance {
            tracing::debug!(norm_sqr, "input already normalized, passing through");
            return Ok(NormalizedAmplitudes::from_unit(vector, false, norm_sqr));
        }

        tracing::info!(
            norm_sqr,
            qubits = vector.num_qubits().count(),
            "input state is not normalized, rescaling"
        );

        let inv_norm = 1.0 / norm_sqr.sqrt();
        let (mut amplitudes, qubits) = vector.into_parts();
        for amplitude in &mut amplitudes {
            *amplitude *= inv_norm;
        }

        Ok(NormalizedAmplitudes::from_unit(
            AmplitudeVector::from_parts(amplitudes, qubits),
            true,
            norm_sqr,
        ))
    }
}
