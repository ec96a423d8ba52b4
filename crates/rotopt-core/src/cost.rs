//! Cost-term interface for nonlinear least-squares solvers.
//!
//! This module defines the contract between a cost term and the external
//! solver that owns the optimization problem. The solver holds flat parameter
//! buffers; on each evaluation it hands a term its parameter block and
//! expects the residual vector and, optionally, the Jacobian of the residual
//! with respect to the block.
//!
//! # Buffer conventions
//!
//! - The parameter block is a flat slice whose layout is fixed by the term
//!   (matrix-valued parameters are column-major, matching the manifold
//!   vectorization).
//! - The Jacobian, when requested, is a `residual_count() x parameter_size()`
//!   block in row-major order, as is conventional for solver-supplied
//!   Jacobian storage.

use crate::{error::Result, types::Scalar};
use std::fmt::Debug;

/// Trait for residual blocks handed to a nonlinear least-squares solver.
///
/// A term declares its parameter-block and residual sizes at registration
/// time; `evaluate` is then called repeatedly with buffers of exactly those
/// sizes. Evaluation is a pure function of its inputs, so a term may be
/// shared across solver threads as long as it is read-only.
pub trait CostTerm<T>: Debug
where
    T: Scalar,
{
    /// Length of the flat parameter block this term consumes.
    fn parameter_size(&self) -> usize;

    /// Number of residuals this term produces.
    fn residual_count(&self) -> usize;

    /// Evaluates the residual and, optionally, the Jacobian.
    ///
    /// # Arguments
    ///
    /// * `params` - Flat parameter block of length `parameter_size()`.
    /// * `residuals` - Output buffer of length `residual_count()`.
    /// * `jacobian` - When present, a row-major output buffer of length
    ///   `residual_count() * parameter_size()`.
    ///
    /// # Errors
    ///
    /// Fails with `DimensionMismatch` if any buffer length disagrees with
    /// the declared sizes; the buffers are never read or written out of
    /// bounds.
    fn evaluate(
        &self,
        params: &[T],
        residuals: &mut [T],
        jacobian: Option<&mut [T]>,
    ) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ManifoldError;

    /// Minimal term for exercising the contract: r = p - target.
    #[derive(Debug)]
    struct OffsetTerm {
        target: f64,
    }

    impl CostTerm<f64> for OffsetTerm {
        fn parameter_size(&self) -> usize {
            1
        }

        fn residual_count(&self) -> usize {
            1
        }

        fn evaluate(
            &self,
            params: &[f64],
            residuals: &mut [f64],
            jacobian: Option<&mut [f64]>,
        ) -> Result<()> {
            if params.len() != 1 || residuals.len() != 1 {
                return Err(ManifoldError::dimension_mismatch(1, params.len()));
            }
            residuals[0] = params[0] - self.target;
            if let Some(jac) = jacobian {
                jac[0] = 1.0;
            }
            Ok(())
        }
    }

    #[test]
    fn test_evaluate_residual_only() {
        let term = OffsetTerm { target: 2.0 };
        let mut residuals = [0.0];
        term.evaluate(&[5.0], &mut residuals, None).unwrap();
        assert_eq!(residuals[0], 3.0);
    }

    #[test]
    fn test_evaluate_with_jacobian() {
        let term = OffsetTerm { target: 2.0 };
        let mut residuals = [0.0];
        let mut jacobian = [0.0];
        term.evaluate(&[5.0], &mut residuals, Some(&mut jacobian))
            .unwrap();
        assert_eq!(jacobian[0], 1.0);
    }

    #[test]
    fn test_declared_sizes() {
        let term = OffsetTerm { target: 0.0 };
        assert_eq!(term.parameter_size(), 1);
        assert_eq!(term.residual_count(), 1);
    }
}
