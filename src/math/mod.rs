//! Generic N-dimensional vectors and matrices.

pub mod cofactor;
pub mod matrix;
pub mod vector;

pub use matrix::{Matrix, SquareMatrix};
pub use vector::{Point, Vector};

/// Global tolerance for approximate floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Largest matrix order accepted by cofactor expansion.
///
/// Laplace expansion costs O(n!), so anything larger is rejected with
/// [`AlgebraError::ExpansionTooLarge`](crate::error::AlgebraError::ExpansionTooLarge).
pub const MAX_EXPANSION_ORDER: usize = 10;
