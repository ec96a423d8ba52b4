//! Concrete rotation-manifold types and cost terms.
//!
//! This crate provides the SO(n) element type with its telescoping Lie-algebra
//! layout and Cayley-transform retraction, together with the Frobenius-norm
//! prior cost term used to anchor a rotation variable to a fixed mean.

pub mod frobenius;
pub mod rotation;

// Re-export the main types for convenience
pub use frobenius::FrobeniusPrior;
pub use rotation::SOn;
