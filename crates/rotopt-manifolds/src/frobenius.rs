//! Frobenius prior: anchors a rotation variable to a fixed "prior mean"
//! matrix by minimizing the Frobenius-norm discrepancy.

use crate::rotation::SOn;
use nalgebra::DMatrix;
use rotopt_core::{
    cost::CostTerm,
    error::{ManifoldError, Result},
    types::Scalar,
};

/// Cost term measuring the Frobenius norm between a rotation estimate and a
/// fixed n x n prior mean.
///
/// The term declares one parameter block of n^2 entries (the flattened
/// rotation matrix, column-major per [`SOn::vec`]) and produces n^2
/// residuals, one per matrix entry, so the sum of squared residuals equals
/// `||R - M||_F^2`.
///
/// The prior mean is captured at construction and never mutated, so one term
/// may be evaluated concurrently from several solver threads.
#[derive(Debug, Clone)]
pub struct FrobeniusPrior<T: Scalar> {
    /// Prior mean matrix
    mean: DMatrix<T>,
    /// Ambient size n
    n: usize,
    /// Residual and parameter-block size n^2
    nn: usize,
    /// Manifold dimension d = n(n-1)/2, the size of a tangent-space update
    dim: usize,
}

impl<T: Scalar> FrobeniusPrior<T> {
    /// Creates a prior term from an n x n mean matrix.
    ///
    /// # Errors
    ///
    /// Fails with `DimensionMismatch` if the mean is not square.
    pub fn new(mean: DMatrix<T>) -> Result<Self> {
        if mean.nrows() != mean.ncols() {
            return Err(ManifoldError::dimension_mismatch(
                "square prior mean",
                format!("{}x{}", mean.nrows(), mean.ncols()),
            ));
        }
        let n = mean.nrows();
        Ok(Self {
            mean,
            n,
            nn: n * n,
            dim: SOn::<T>::manifold_dim(n),
        })
    }

    /// The stored prior mean.
    pub fn mean(&self) -> &DMatrix<T> {
        &self.mean
    }

    /// Manifold dimension of the rotation variable this term constrains.
    ///
    /// The solver's update step works in the d-dimensional tangent space;
    /// evaluation itself only touches the n^2 ambient parameters.
    pub fn manifold_dim(&self) -> usize {
        self.dim
    }
}

impl<T: Scalar> CostTerm<T> for FrobeniusPrior<T> {
    fn parameter_size(&self) -> usize {
        self.nn
    }

    fn residual_count(&self) -> usize {
        self.nn
    }

    /// Evaluates the element-wise difference `vec(R) - vec(M)` in
    /// column-major order.
    ///
    /// The residual is linear in the parameters with unit coefficients, so
    /// the Jacobian, when requested, is the n^2 x n^2 identity (row-major,
    /// though the identity is layout-agnostic).
    fn evaluate(&self, params: &[T], residuals: &mut [T], jacobian: Option<&mut [T]>) -> Result<()> {
        if params.len() != self.nn {
            return Err(ManifoldError::dimension_mismatch(self.nn, params.len()));
        }
        if residuals.len() != self.nn {
            return Err(ManifoldError::dimension_mismatch(self.nn, residuals.len()));
        }

        // params holds R column-major, matching the mean's storage order
        let mut r = 0;
        for j in 0..self.n {
            for i in 0..self.n {
                residuals[r] = params[r] - self.mean[(i, j)];
                r += 1;
            }
        }

        if let Some(jac) = jacobian {
            if jac.len() != self.nn * self.nn {
                return Err(ManifoldError::dimension_mismatch(
                    self.nn * self.nn,
                    jac.len(),
                ));
            }
            jac.fill(T::zero());
            for k in 0..self.nn {
                jac[k * self.nn + k] = T::one();
            }
        }
        Ok(())
    }
}
