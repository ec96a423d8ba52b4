//! Special orthogonal group SO(n) = {R in R^{n x n} : R^T R = I, det R = +1}
//!
//! The SO(n) element type represents rotations in n-dimensional space. It
//! naturally appears in:
//! - Rotation averaging and pose-graph optimization
//! - Semidefinite relaxations over rotations
//! - Attitude estimation
//!
//! The tangent space at the identity is the Lie algebra so(n) of
//! skew-symmetric n x n matrices, isomorphic to R^d with d = n(n-1)/2.

use nalgebra::{DMatrix, DVector};
use rotopt_core::{
    error::{ManifoldError, Result},
    types::Scalar,
};

/// An element of SO(n), stored as its n x n ambient rotation matrix.
///
/// This is a thin carrier: orthogonality is assumed, not enforced. The type
/// owns an independent copy of its matrix and exposes no mutators, so a
/// constructed element never aliases caller storage and is safe to share
/// read-only across threads.
///
/// # Mathematical Properties
///
/// - **Dimension**: d = n(n-1)/2
/// - **Tangent space**: T_I SO(n) = {X in R^{n x n} : X + X^T = 0}
/// - **Retraction**: Cayley transform X -> (I + X)(I - X)^{-1}, a first-order
///   retraction mapping skew-symmetric generators to orthogonal matrices
#[derive(Debug, Clone, PartialEq)]
pub struct SOn<T: Scalar> {
    /// Rotation matrix (ambient representation)
    matrix: DMatrix<T>,
}

impl<T: Scalar> SOn<T> {
    /// Creates an element from an n x n matrix, taking ownership of it.
    ///
    /// The matrix is assumed to be a rotation; no orthogonality check is
    /// performed.
    pub fn new(matrix: DMatrix<T>) -> Self {
        Self { matrix }
    }

    /// The identity rotation of size n, the canonical base point.
    pub fn identity(n: usize) -> Self {
        Self {
            matrix: DMatrix::identity(n, n),
        }
    }

    /// Read-only access to the stored rotation matrix.
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Ambient size n, recovered from the matrix row count.
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Manifold dimension d = n(n-1)/2 of SO(n).
    pub fn manifold_dim(n: usize) -> usize {
        n * (n - 1) / 2
    }

    /// Recovers the ambient size n from a manifold dimension d = n(n-1)/2.
    ///
    /// Solves n^2 - n - 2d = 0 for the positive root:
    /// n = ceil((1 + sqrt(1 + 8d)) / 2). Exact for any triangular d; the
    /// result for non-triangular d is unspecified and left to the caller.
    pub fn ambient_dim(d: usize) -> usize {
        let disc = (1.0 + 8.0 * d as f64).sqrt();
        ((1.0 + disc) / 2.0).ceil() as usize
    }

    /// Column-major flattening of the rotation matrix into a length-n^2
    /// vector.
    ///
    /// This is the ambient-space vectorization used by residual computations
    /// that operate on raw matrix entries.
    ///
    /// # Errors
    ///
    /// Requesting the Jacobian fails with `NotImplemented`: the pushforward
    /// of the vectorization composed with the retraction is an open gap, and
    /// it must surface as an error rather than silently wrong data.
    pub fn vec(&self, jacobian: Option<&mut DMatrix<T>>) -> Result<DVector<T>> {
        if jacobian.is_some() {
            return Err(ManifoldError::not_implemented("SOn::vec jacobian"));
        }
        Ok(DVector::from_column_slice(self.matrix.as_slice()))
    }

    /// Hat operator: builds the skew-symmetric Lie-algebra matrix for a
    /// d-vector, where d is the manifold dimension.
    ///
    /// The construction is recursive, and the d-vector is laid out such that
    /// the last element corresponds to so(2), the last 3 to so(3), the last
    /// 6 to so(4), etc. For example, the vector space isomorphic to so(5) is
    /// laid out as
    ///
    /// ```text
    ///   a b c d | u v w | x y | z
    /// ```
    ///
    /// where the latter elements correspond to "telescoping" sub-algebras:
    ///
    /// ```text
    ///   0 -z  y  w -d
    ///   z  0 -x -v  c
    ///  -y  x  0  u -b
    ///  -w  v -u  0  a
    ///   d -c  b -a  0
    /// ```
    ///
    /// This scheme behaves exactly as expected for SO(2) and SO(3).
    ///
    /// # Errors
    ///
    /// Fails with `InvalidTangent` if the vector length implies n < 2:
    /// SO(0) and SO(1) have no algebra.
    pub fn hat(xi: &DVector<T>) -> Result<DMatrix<T>> {
        let d = xi.len();
        let n = Self::ambient_dim(d);
        if n < 2 {
            return Err(ManifoldError::invalid_tangent(format!(
                "hat requires n >= 2, tangent of length {d} implies n = {n}"
            )));
        }

        let mut x = DMatrix::<T>::zeros(n, n);
        if n == 2 {
            // SO(2) case is the recursion bottom
            x[(0, 1)] = -xi[0];
            x[(1, 0)] = xi[0];
        } else {
            // Recurse on the trailing entries for the top-left so(n-1) block
            let dmin = (n - 1) * (n - 2) / 2;
            let sub = Self::hat(&xi.rows(d - dmin, dmin).clone_owned())?;
            x.view_mut((0, 0), (n - 1, n - 1)).copy_from(&sub);

            // Signs of the last row/column alternate, starting at (-1)^d
            let mut sign = if d % 2 == 0 { T::one() } else { -T::one() };
            for i in 0..(n - 1) {
                let j = n - 2 - i;
                x[(n - 1, j)] = -sign * xi[i];
                x[(j, n - 1)] = sign * xi[i];
                sign = -sign;
            }
        }
        Ok(x)
    }

    /// Retraction from the tangent space onto the manifold via the Cayley
    /// transform: with X = hat(xi / 2),
    ///
    /// ```text
    /// R(xi) = (I + X)(I - X)^{-1}
    /// ```
    ///
    /// This is a first-order retraction: R(0) = I exactly, it is a local
    /// diffeomorphism near the identity, and it maps skew-symmetric
    /// generators to orthogonal matrices. (I - X) has no unit eigenvalue for
    /// skew-symmetric X, so the inverse exists over the operating domain.
    ///
    /// # Errors
    ///
    /// Requesting the Jacobian fails with `NotImplemented` (open gap, same
    /// policy as [`SOn::vec`]). A singular (I - X) surfaces as
    /// `NumericalError`.
    pub fn retract(xi: &DVector<T>, jacobian: Option<&mut DMatrix<T>>) -> Result<Self> {
        if jacobian.is_some() {
            return Err(ManifoldError::not_implemented("SOn::retract jacobian"));
        }
        let half = xi * <T as Scalar>::from_f64(0.5);
        let x = Self::hat(&half)?;
        let n = x.nrows();
        let identity = DMatrix::<T>::identity(n, n);
        let inv = (&identity - &x).try_inverse().ok_or_else(|| {
            ManifoldError::numerical_error("(I - X) is singular in Cayley retraction")
        })?;
        Ok(Self::new((identity + x) * inv))
    }
}

impl<T: Scalar> From<DMatrix<T>> for SOn<T> {
    fn from(matrix: DMatrix<T>) -> Self {
        Self::new(matrix)
    }
}
