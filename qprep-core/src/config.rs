//! Normalizer configuration
//!
//! Tolerance constants are explicit configuration rather than magic numbers
//! scattered across checks, so test suites can tighten or loosen them
//! deterministically.

/// Default tolerance for treating a squared norm as already unit-length
///
/// Input with |Σ|aᵢ|² − 1| within this bound passes through unchanged,
/// avoiding floating-point noise on already-valid states.
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-8;

/// Default threshold below which a squared norm is considered degenerate
///
/// A vector whose squared norm falls at or below this value is rejected as a
/// zero vector rather than divided by a near-zero norm.
pub const DEFAULT_ZERO_EPSILON: f64 = 1e-10;

/// Configuration for the amplitude normalizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizerConfig {
    /// How close a squared norm must be to 1.0 to skip rescaling
    ///
    /// Default: [`DEFAULT_NORM_TOLERANCE`]
    pub norm_tolerance: f64,

    /// The squared-norm threshold below which a vector is degenerate
    ///
    /// Default: [`DEFAULT_ZERO_EPSILON`]
    pub zero_epsilon: f64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
            zero_epsilon: DEFAULT_ZERO_EPSILON,
        }
    }
}

impl NormalizerConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skip-rescale tolerance
    pub fn with_norm_tolerance(mut self, tolerance: f64) -> Self {
        self.norm_tolerance = tolerance;
        self
    }

    /// Set the degeneracy threshold
    pub fn with_zero_epsilon(mut self, epsilon: f64) -> Self {
        self.zero_epsilon = epsilon;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.norm_tolerance.is_finite() || self.norm_tolerance <= 0.0 {
            return Err(format!(
                "norm_tolerance must be a positive finite value, got {}",
                self.norm_tolerance
            ));
        }

        if !self.zero_epsilon.is_finite() || self.zero_epsilon <= 0.0 {
            return Err(format!(
                "zero_epsilon must be a positive finite value, got {}",
                self.zero_epsilon
            ));
        }

        if self.norm_tolerance >= 1.0 {
            return Err(format!(
                "norm_tolerance must be < 1, got {}",
                self.norm_tolerance
            ));
        }

        Ok(())
    }
}
