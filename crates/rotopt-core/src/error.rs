//! Error types for manifold and cost-term operations.
//!
//! The taxonomy distinguishes genuinely malformed input (`InvalidTangent`,
//! `DimensionMismatch`) from numerical failures and from capability gaps
//! (`NotImplemented`), so callers can tell a bad argument apart from a
//! derivative path that simply does not exist yet.

use thiserror::Error;

/// Errors that can occur during manifold and cost-term operations.
#[derive(Debug, Clone, Error)]
pub enum ManifoldError {
    /// Vector is not a valid tangent-space element.
    ///
    /// This error occurs when a tangent vector is malformed, e.g. its length
    /// implies an ambient dimension below 2 for the hat operator.
    #[error("Vector is not a valid tangent: {reason}")]
    InvalidTangent {
        /// Description of why the tangent vector is invalid
        reason: String,
    },

    /// Dimension mismatch between buffers or matrices.
    ///
    /// This error occurs when an operation involves sizes that disagree with
    /// the declared parameter-block or residual sizes.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// Numerical failure detected.
    ///
    /// This error occurs when a numerical operation breaks down, such as
    /// inverting a singular matrix.
    #[error("Numerical failure: {reason}")]
    NumericalError {
        /// Description of the numerical issue
        reason: String,
    },

    /// Method or feature not implemented.
    ///
    /// This error is used for optional derivative paths that are not
    /// implemented, and is distinct from `InvalidTangent` so callers can
    /// detect a missing feature versus a genuinely bad input.
    #[error("Feature not implemented: {feature}")]
    NotImplemented {
        /// Name of the unimplemented feature
        feature: String,
    },
}

impl ManifoldError {
    /// Create an InvalidTangent error with a custom reason.
    pub fn invalid_tangent<S: Into<String>>(reason: S) -> Self {
        Self::InvalidTangent {
            reason: reason.into(),
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a NumericalError with a custom reason.
    pub fn numerical_error<S: Into<String>>(reason: S) -> Self {
        Self::NumericalError {
            reason: reason.into(),
        }
    }

    /// Create a NotImplemented error for a specific feature.
    pub fn not_implemented<S: Into<String>>(feature: S) -> Self {
        Self::NotImplemented {
            feature: feature.into(),
        }
    }
}

/// Result type alias for operations that can produce ManifoldError.
pub type Result<T> = std::result::Result<T, ManifoldError>;
