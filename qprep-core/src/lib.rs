//! Core types for the qprep state-preparation pipeline
//!
//! This crate provides the numeric building blocks for turning a raw list of
//! complex amplitudes into a physically valid n-qubit state:
//! - [`AmplitudeVector`]: amplitude storage with a power-of-two length invariant
//! - [`QubitCount`]: type-safe qubit count derived from the amplitude count
//! - [`Normalizer`]: norm checking, zero-vector rejection, and rescaling
//!
//! # Example
//! ```
//! use qprep_core::{AmplitudeVector, Normalizer};
//!
//! let amps = AmplitudeVector::from_real(&[3.0, 4.0]).unwrap();
//! let normalized = Normalizer::default().normalize(amps).unwrap();
//! assert!((normalized.norm_sqr() - 1.0).abs() < 1e-10);
//! ```

pub mod amplitude;
pub mod config;
pub mod error;
pub mod normalize;
pub mod qubit;

// Re-exports for convenience
pub use amplitude::{AmplitudeVector, NormalizedAmplitudes};
pub use config::{NormalizerConfig, DEFAULT_NORM_TOLERANCE, DEFAULT_ZERO_EPSILON};
pub use error::PrepError;
pub use normalize::{NormalizationReport, Normalizer};
pub use num_complex::Complex64;
pub use qubit::QubitCount;

/// Type alias for results in qprep
pub type Result<T> = std::result::Result<T, PrepError>;
