use std::fmt;
use std::ops::{Add, Sub};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{AlgebraError, Error, Result};
use crate::math::{Point, TOLERANCE};

use super::Vector2;

/// A 2D position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Returns the point offset by `vector`.
    #[must_use]
    pub fn translate(self, vector: Vector2) -> Self {
        Self::new(self.x + vector.x, self.y + vector.y)
    }
}

impl Add<Vector2> for Point2 {
    type Output = Self;

    fn add(self, vector: Vector2) -> Self {
        self.translate(vector)
    }
}

impl Sub for Point2 {
    type Output = Vector2;

    fn sub(self, start: Self) -> Vector2 {
        Vector2::from_points(self, start)
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Point::new(vec![p.x, p.y])
    }
}

impl TryFrom<&Point> for Point2 {
    type Error = Error;

    fn try_from(p: &Point) -> Result<Self> {
        match p.coordinates() {
            &[x, y] => Ok(Self::new(x, y)),
            other => Err(AlgebraError::mismatch("2D point conversion", 2, other.len()).into()),
        }
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(p: Point2) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl AbsDiffEq for Point2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point2 {
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

    #[test]
    fn translate_moves_by_vector() {
        let p = Point2::new(1.0, 2.0);
        assert_eq!(p.translate(Vector2::new(-1.0, 0.5)), Point2::new(0.0, 2.5));
        assert_eq!(p + Vector2::default(), p);
    }

    #[test]
    fn difference_is_displacement() {
        let a = Point2::new(4.0, 1.0);
        let b = Point2::new(1.0, 5.0);
        assert_eq!(a - b, Vector2::new(3.0, -4.0));
        assert_eq!(b.translate(a - b), a);
    }

    #[test]
    fn conversions() {
        let p = Point2::new(-3.0, 0.25);
        assert_eq!(Point2::try_from(&Point::from(p)).unwrap(), p);
        assert!(Point2::try_from(&Point::new(vec![1.0])).is_err());
        let n: nalgebra::Point2<f64> = p.into();
        assert_eq!(Point2::from(n), p);
        assert_eq!(Point2::origin().to_string(), "[0, 0]");
    }
}
