//! Immutable vectors and matrices with determinant, adjoint and inverse by
//! cofactor expansion, plus 2D points, vectors and lines.
//!
//! Matrices store column vectors and `a.multiply(&b)` is `a × b`; see
//! [`math::Matrix`] for the full convention.

pub mod error;
pub mod geometry;
pub mod math;

pub use error::{AlgebraError, Error, GeometryError, Result};
pub use geometry::{Line, Point2, Vector2};
pub use math::{Matrix, Point, SquareMatrix, Vector};
