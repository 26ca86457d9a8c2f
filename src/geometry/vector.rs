use std::fmt;
use std::ops::{Add, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{AlgebraError, Error, Result};
use crate::math::{Matrix, Vector, TOLERANCE};

use super::Point2;

/// A 2D displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Displacement from `start` to `end`.
    #[must_use]
    pub fn from_points(end: Point2, start: Point2) -> Self {
        Self::new(end.x - start.x, end.y - start.y)
    }

    /// Displacement from the origin to `end`.
    #[must_use]
    pub fn from_point(end: Point2) -> Self {
        Self::new(end.x, end.y)
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    #[must_use]
    pub fn scale(self, value: f64) -> Self {
        Self::new(value * self.x, value * self.y)
    }

    #[must_use]
    pub fn sum(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        self.sum(other.opposite())
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Z component of the 3D cross product, `self.x * other.y - other.x * self.y`.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - other.x * self.y
    }

    /// The vector rotated a quarter turn counter-clockwise: `(x, y) → (-y, x)`.
    #[must_use]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Column-vector product `m × self` for a 2×2 matrix `m`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` unless `m` is 2×2.
    pub fn transform(self, m: &Matrix) -> Result<Self> {
        let [c0, c1] = m.columns() else {
            return Err(AlgebraError::mismatch("2D transform", 2, m.width()).into());
        };
        match (c0.coordinates(), c1.coordinates()) {
            (&[a, b], &[c, d]) => Ok(Self::new(a * self.x + c * self.y, b * self.x + d * self.y)),
            _ => Err(AlgebraError::mismatch("2D transform", 2, m.height()).into()),
        }
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        self.opposite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.sum(other)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.subtract(other)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Vector::new(vec![v.x, v.y])
    }
}

impl TryFrom<&Vector> for Vector2 {
    type Error = Error;

    fn try_from(v: &Vector) -> Result<Self> {
        match v.coordinates() {
            &[x, y] => Ok(Self::new(x, y)),
            other => Err(AlgebraError::mismatch("2D vector conversion", 2, other.len()).into()),
        }
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    fn default_max_relative() -> f64 {
        TOLERANCE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_points_defaults_to_origin() {
        let end = Point2::new(3.0, 4.0);
        assert_eq!(Vector2::from_point(end), Vector2::new(3.0, 4.0));
        assert_eq!(
            Vector2::from_points(end, Point2::new(1.0, 1.0)),
            Vector2::new(2.0, 3.0)
        );
    }

    #[test]
    fn arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.sum(b), Vector2::new(4.0, 6.0));
        assert_eq!(b - a, Vector2::new(2.0, 2.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a.scale(0.5), Vector2::new(0.5, 1.0));
        assert_eq!(a + a.opposite(), Vector2::default());
    }

    #[test]
    fn norm_and_cross() {
        assert_relative_eq!(Vector2::new(3.0, -4.0).norm(), 5.0);
        assert_relative_eq!(Vector2::new(1.0, 0.0).cross(Vector2::new(0.0, 1.0)), 1.0);
        assert_relative_eq!(Vector2::new(2.0, 4.0).cross(Vector2::new(1.0, 2.0)), 0.0);
    }

    #[test]
    fn perpendicular_rotates_counter_clockwise() {
        assert_eq!(Vector2::new(1.0, 0.0).perpendicular(), Vector2::new(0.0, 1.0));
        assert_eq!(Vector2::new(2.0, 3.0).perpendicular(), Vector2::new(-3.0, 2.0));
    }

    #[test]
    fn transform_matches_generic_product() {
        let m = Matrix::from_rows(vec![
            Vector::new(vec![1.0, 2.0]),
            Vector::new(vec![3.0, 4.0]),
        ])
        .unwrap();
        let v = Vector2::new(1.0, -1.0);
        let direct = v.transform(&m).unwrap();
        let generic = Vector2::try_from(&m.mul_vector(&v.into()).unwrap()).unwrap();
        assert_eq!(direct, Vector2::new(-1.0, -1.0));
        assert_eq!(direct, generic);
    }

    #[test]
    fn transform_requires_2x2() {
        assert!(Vector2::new(1.0, 1.0).transform(&Matrix::identity(3)).is_err());
        let tall = Matrix::new(vec![
            Vector::new(vec![1.0, 0.0, 0.0]),
            Vector::new(vec![0.0, 1.0, 0.0]),
        ])
        .unwrap();
        assert!(Vector2::new(1.0, 1.0).transform(&tall).is_err());
    }

    #[test]
    fn conversions() {
        let v = Vector2::new(1.5, -2.0);
        assert_eq!(Vector2::try_from(&Vector::from(v)).unwrap(), v);
        assert!(Vector2::try_from(&Vector::new(vec![1.0, 2.0, 3.0])).is_err());
        let n: nalgebra::Vector2<f64> = v.into();
        assert_eq!(Vector2::from(n), v);
        assert_eq!(v.to_string(), "[1.5, -2]");
    }
}
