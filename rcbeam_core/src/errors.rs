//! # Error Types
//!
//! Structured error types for rcbeam_core. Every failure the engine can
//! produce is reported synchronously through one of these variants — the
//! solvers never substitute NaN or zero for a value they could not compute.
//!
//! ## Example
//!
//! ```rust
//! use rcbeam_core::errors::{RcError, RcResult};
//!
//! fn validate_strength(fc_prime: f64) -> RcResult<()> {
//!     if fc_prime <= 0.0 {
//!         return Err(RcError::missing_property("fc_prime"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rcbeam_core operations
pub type RcResult<T> = Result<T, RcError>;

/// Structured error type for the section-geometry and flexural-analysis
/// engines.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic error handling by callers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RcError {
    /// A polygon is malformed: too few vertices, negative net area, or a
    /// horizontal cut with an ambiguous number of boundary crossings.
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    /// A clipping (void) polygon produced an unexpected intersection count
    /// at a queried elevation.
    #[error("Invalid clipping at elevation {elevation}: found {crossings} boundary crossings, expected 0 or 2")]
    InvalidClipping { elevation: f64, crossings: usize },

    /// A centroid was requested for a zero-area polygon.
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// An iterative solver exceeded its iteration bound without meeting the
    /// equilibrium tolerance.
    #[error("Solver did not converge: {solver} exceeded {iterations} iterations (residual {residual})")]
    NonConvergence {
        solver: String,
        iterations: usize,
        residual: f64,
    },

    /// A material property required by the requested analysis is unset.
    #[error("Missing required property: {property}")]
    MissingProperty { property: String },
}

impl RcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        RcError::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create an InvalidClipping error
    pub fn invalid_clipping(elevation: f64, crossings: usize) -> Self {
        RcError::InvalidClipping {
            elevation,
            crossings,
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        RcError::DivisionByZero {
            context: context.into(),
        }
    }

    /// Create a NonConvergence error
    pub fn non_convergence(solver: impl Into<String>, iterations: usize, residual: f64) -> Self {
        RcError::NonConvergence {
            solver: solver.into(),
            iterations,
            residual,
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(property: impl Into<String>) -> Self {
        RcError::MissingProperty {
            property: property.into(),
        }
    }

    /// Check if this error may succeed on retry with different solver
    /// settings (e.g. a larger iteration bound or finer step).
    ///
    /// Retry policy belongs to the caller, not the engine.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RcError::NonConvergence { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            RcError::InvalidClipping { .. } => "INVALID_CLIPPING",
            RcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            RcError::NonConvergence { .. } => "NON_CONVERGENCE",
            RcError::MissingProperty { .. } => "MISSING_PROPERTY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = RcError::invalid_clipping(125.0, 1);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: RcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            RcError::missing_property("fy").error_code(),
            "MISSING_PROPERTY"
        );
        assert_eq!(
            RcError::non_convergence("capacity", 10, 4.2).error_code(),
            "NON_CONVERGENCE"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(RcError::non_convergence("balanced", 5, 1.0).is_recoverable());
        assert!(!RcError::invalid_geometry("too few vertices").is_recoverable());
    }
}
