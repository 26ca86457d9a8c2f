//! 2D points, vectors and lines built on direct formulas.
//!
//! Only line intersection goes through the generic [`Matrix`](crate::math::Matrix)
//! inverse.

mod line;
mod point;
mod vector;

pub use line::Line;
pub use point::Point2;
pub use vector::Vector2;
