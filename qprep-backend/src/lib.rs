//! State-construction backend abstraction for qprep
//!
//! This crate provides a unified interface for committing a normalized
//! amplitude vector to a quantum state backend:
//! - Local statevector backend (built-in)
//! - Cloud simulators and real hardware (external implementations of
//!   [`StateBackend`])
//!
//! # Architecture
//!
//! The backend system uses a trait-based abstraction so callers can switch
//! execution targets without changing the preparation pipeline. The
//! [`StatePreparer`] composes the pure numeric stages from `qprep-core` with
//! a backend and returns an opaque [`PreparedState`] handle.

pub mod backend;
pub mod capabilities;
pub mod error;
pub mod local;
pub mod prepared;
pub mod preparer;

pub use backend::{BackendType, StateBackend};
pub use capabilities::BackendCapabilities;
pub use error::{BackendError, Result};
pub use local::{LocalBackendConfig, LocalStateVectorBackend};
pub use prepared::{PreparationMetadata, PreparedState};
pub use preparer::{PreparationResult, StatePreparer};
