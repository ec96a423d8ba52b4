//! Type definitions and aliases for rotation-manifold optimization.
//!
//! This module provides the scalar trait and common linear-algebra aliases
//! used throughout the workspace.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in optimization (f32 or f64).
///
/// This trait combines the numeric traits required by manifold operations
/// and cost-term evaluation.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Machine epsilon for this scalar type.
    const EPSILON: Self;

    /// Default tolerance for convergence and residual checks.
    const DEFAULT_TOLERANCE: Self;

    /// Tolerance for checking orthogonality of rotation matrices.
    const ORTHOGONALITY_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }

    /// Convert to f64 (for logging/display).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn to_f64(self) -> f64 {
        num_traits::cast(self).expect("Failed to convert to f64")
    }

    /// Convert from usize (for dimension counts).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_usize(v: usize) -> Self {
        <Self as FromPrimitive>::from_usize(v).expect("Failed to convert from usize")
    }
}

impl Scalar for f32 {
    const EPSILON: Self = f32::EPSILON;
    const DEFAULT_TOLERANCE: Self = 1e-4;
    const ORTHOGONALITY_TOLERANCE: Self = 1e-6;
}

impl Scalar for f64 {
    const EPSILON: Self = f64::EPSILON;
    const DEFAULT_TOLERANCE: Self = 1e-6;
    const ORTHOGONALITY_TOLERANCE: Self = 1e-12;
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_trait_f32() {
        assert_eq!(<f32 as Scalar>::EPSILON, f32::EPSILON);
        assert!(<f32 as Scalar>::DEFAULT_TOLERANCE > 0.0);
        assert!(<f32 as Scalar>::ORTHOGONALITY_TOLERANCE > 0.0);
    }

    #[test]
    fn test_scalar_trait_f64() {
        assert_eq!(<f64 as Scalar>::EPSILON, f64::EPSILON);
        assert!(<f64 as Scalar>::ORTHOGONALITY_TOLERANCE < <f64 as Scalar>::DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_scalar_conversions() {
        let val_f64 = 3.14159;
        let val_f32 = <f32 as Scalar>::from_f64(val_f64);
        assert_relative_eq!(f64::from(val_f32), val_f64, epsilon = 1e-6);

        assert_eq!(<f64 as Scalar>::from_usize(7), 7.0);
        assert_eq!(<f64 as Scalar>::to_f64(2.5), 2.5);
    }

    #[test]
    fn test_type_aliases() {
        let _dm: DMatrix<f64> = DMatrix::zeros(3, 4);
        let _dv: DVector<f64> = DVector::zeros(10);
    }
}
