//! Core traits and types for rotation-manifold optimization.
//!
//! This crate provides the foundational pieces shared by manifold
//! implementations and the cost terms handed to a nonlinear least-squares
//! solver:
//!
//! - [`error`]: Error types for manifold and cost-term operations
//! - [`types`]: Scalar trait and linear-algebra type aliases
//! - [`cost`]: The residual/Jacobian contract expected by an external solver

pub mod cost;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{ManifoldError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use rotopt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cost::CostTerm;
    pub use crate::error::{ManifoldError, Result};
    pub use crate::types::{DMatrix, DVector, Scalar};
}
