//! Amplitude vector storage
//!
//! [`AmplitudeVector`] holds raw user-supplied amplitudes once their count has
//! passed the dimension check. [`NormalizedAmplitudes`] is the proof-carrying
//! result of normalization: it can only be produced by
//! [`Normalizer::normalize`](crate::Normalizer::normalize), so downstream
//! consumers never re-validate.

use crate::qubit::QubitCount;
use crate::Result;
use num_complex::Complex64;

/// An ordered sequence of complex amplitudes over n qubits
///
/// The length invariant (a positive power of two) is established at
/// construction and never changes; entries are indexed in standard
/// binary order, |0…0⟩ through |1…1⟩.
///
/// # Example
/// ```
/// use qprep_core::AmplitudeVector;
///
/// let amps = AmplitudeVector::from_real(&[1.0, 0.0, 1.0, 0.0]).unwrap();
/// assert_eq!(amps.num_qubits().count(), 2);
/// assert_eq!(amps.dimension(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeVector {
    amplitudes: Vec<Complex64>,
    qubits: QubitCount,
}

impl AmplitudeVector {
    /// Create an amplitude vector from complex values
    ///
    /// # Errors
    /// Returns [`PrepError::InvalidDimension`](crate::PrepError::InvalidDimension)
    /// when the value count is zero or not a power of two.
    ///
    /// # Example
    /// ```
    /// use qprep_core::{AmplitudeVector, Complex64};
    ///
    /// let amps = AmplitudeVector::new(vec![
    ///     Complex64::new(1.0, 1.0),
    ///     Complex64::new(0.0, 0.0),
    /// ]).unwrap();
    /// assert_eq!(amps.num_qubits().count(), 1);
    /// ```
    pub fn new(amplitudes: Vec<Complex64>) -> Result<Self> {
        let qubits = QubitCount::from_dimension(amplitudes.len())?;
        Ok(Self { amplitudes, qubits })
    }

    /// Create an amplitude vector from real values
    ///
    /// Real input is promoted to complex storage so normalization has a
    /// single numeric path.
    pub fn from_real(values: &[f64]) -> Result<Self> {
        Self::new(values.iter().map(|&re| Complex64::new(re, 0.0)).collect())
    }

    pub(crate) fn from_parts(amplitudes: Vec<Complex64>, qubits: QubitCount) -> Self {
        debug_assert_eq!(amplitudes.len(), qubits.dimension());
        Self { amplitudes, qubits }
    }

    pub(crate) fn into_parts(self) -> (Vec<Complex64>, QubitCount) {
        (self.amplitudes, self.qubits)
    }

    /// Get the qubit count derived from the amplitude count
    #[inline]
    pub fn num_qubits(&self) -> QubitCount {
        self.qubits
    }

    /// Get the state dimension (2^n)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get the amplitudes as a slice
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Iterate over the amplitudes
    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.amplitudes.iter()
    }

    /// Compute the sum of squared magnitudes Σ|aᵢ|²
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }
}

/// An amplitude vector whose squared norm is within tolerance of 1
///
/// Produced exclusively by [`Normalizer::normalize`](crate::Normalizer::normalize);
/// holding one is proof that the dimension and norm invariants hold, so the
/// state preparer performs no re-validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAmplitudes {
    vector: AmplitudeVector,
    rescaled: bool,
    input_norm_sqr: f64,
}

impl NormalizedAmplitudes {
    pub(crate) fn from_unit(vector: AmplitudeVector, rescaled: bool, input_norm_sqr: f64) -> Self {
        Self {
            vector,
            rescaled,
            input_norm_sqr,
        }
    }

    /// Get the qubit count
    #[inline]
    pub fn num_qubits(&self) -> QubitCount {
        self.vector.num_qubits()
    }

    /// Get the state dimension (2^n)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.vector.dimension()
    }

    /// Get the normalized amplitudes as a slice
    #[inline]
    pub fn as_slice(&self) -> &[Complex64] {
        self.vector.as_slice()
    }

    /// Iterate over the normalized amplitudes
    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.vector.iter()
    }

    /// Sum of squared magnitudes of the normalized vector (≈ 1)
    pub fn norm_sqr(&self) -> f64 {
        self.vector.norm_sqr()
    }

    /// Whether the input needed rescaling to reach unit norm
    #[inline]
    pub fn was_rescaled(&self) -> bool {
        self.rescaled
    }

    /// Sum of squared magnitudes of the vector as supplied
    #[inline]
    pub fn input_norm_sqr(&self) -> f64 {
        self.input_norm_sqr
    }

    /// Consume the wrapper and return the underlying vector
    pub fn into_vector(self) -> AmplitudeVector {
        self.vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrepError;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid_lengths() {
        for n in 0..=6 {
            let amps = AmplitudeVector::from_real(&vec![1.0; 1 << n]).unwrap();
            assert_eq!(amps.num_qubits().count(), n);
        }
    }

    #[test]
    fn test_new_rejects_bad_lengths() {
        for count in [0usize, 3, 5, 6, 7, 9] {
            let err = AmplitudeVector::from_real(&vec![1.0; count]).unwrap_err();
            assert_eq!(err, PrepError::InvalidDimension { count });
        }
    }

    #[test]
    fn test_norm_sqr_real() {
        let amps = AmplitudeVector::from_real(&[3.0, 4.0]).unwrap();
        assert_relative_eq!(amps.norm_sqr(), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_sqr_complex() {
        // |1+i|² + |1-i|² = 2 + 2
        let amps = AmplitudeVector::new(vec![
            Complex64::new(1.0, 1.0),
            Complex64::new(1.0, -1.0),
        ])
        .unwrap();
        assert_relative_eq!(amps.norm_sqr(), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_real_promotion() {
        let amps = AmplitudeVector::from_real(&[1.0, 0.0]).unwrap();
        assert_eq!(amps.as_slice()[0], Complex64::new(1.0, 0.0));
        assert_eq!(amps.as_slice()[1], Complex64::new(0.0, 0.0));
    }
}
