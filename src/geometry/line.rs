use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::Matrix;

use super::{Point2, Vector2};

/// An infinite 2D line through `point` along `direction`.
///
/// The parametric form is `P(t) = point + t * direction`. The direction is
/// stored as given, without normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Point2,
    direction: Vector2,
}

impl Line {
    #[must_use]
    pub fn new(point: Point2, direction: Vector2) -> Self {
        Self { point, direction }
    }

    /// Returns the anchor point of the line.
    #[must_use]
    pub fn point(&self) -> Point2 {
        self.point
    }

    /// Returns the direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Evaluates `point + t * direction`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.point.translate(self.direction.scale(t))
    }

    /// The line through `p` with the same direction.
    #[must_use]
    pub fn parallel_through(&self, p: Point2) -> Self {
        Self::new(p, self.direction)
    }

    /// The line through `p` with the direction rotated a quarter turn.
    #[must_use]
    pub fn perpendicular_through(&self, p: Point2) -> Self {
        Self::new(p, self.direction.perpendicular())
    }

    /// Returns `true` if the direction vectors have a zero cross product.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_parallel(&self, other: &Self) -> bool {
        self.direction.cross(other.direction) == 0.0
    }

    /// Intersection point of two non-parallel lines.
    ///
    /// Solves `p0 + t * d0 = p1 + s * d1` by inverting the 2×2 matrix with
    /// columns `d0` and `-d1`, then evaluates the second line at `s`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ParallelLines` if the lines are parallel
    /// - `AlgebraError::SingularMatrix` if the direction matrix is too close to
    ///   singular to invert
    pub fn intersection(&self, other: &Self) -> Result<Point2> {
        if self.is_parallel(other) {
            debug!(
                d0 = %self.direction,
                d1 = %other.direction,
                "no intersection between parallel lines"
            );
            return Err(GeometryError::ParallelLines.into());
        }
        let m = Matrix::new(vec![
            self.direction.into(),
            other.direction.opposite().into(),
        ])?;
        let offset = other.point - self.point;
        let params = offset.transform(&m.inverse()?)?;
        Ok(other.point_at(params.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AlgebraError, Error};
    use approx::assert_relative_eq;

    fn line(px: f64, py: f64, dx: f64, dy: f64) -> Line {
        Line::new(Point2::new(px, py), Vector2::new(dx, dy))
    }

    #[test]
    fn point_at_walks_direction() {
        let l = line(1.0, 1.0, 2.0, -1.0);
        assert_eq!(l.point_at(0.0), Point2::new(1.0, 1.0));
        assert_eq!(l.point_at(1.5), Point2::new(4.0, -0.5));
    }

    #[test]
    fn parallel_and_perpendicular_through() {
        let l = line(0.0, 0.0, 1.0, 2.0);
        let p = Point2::new(5.0, 5.0);
        let par = l.parallel_through(p);
        assert_eq!(par.point(), p);
        assert_eq!(par.direction(), l.direction());
        assert!(Line::is_parallel(&l, &par));

        let perp = l.perpendicular_through(p);
        assert_eq!(perp.direction(), Vector2::new(-2.0, 1.0));
        assert!(!l.is_parallel(&perp));
    }

    #[test]
    fn is_parallel_ignores_orientation_and_length() {
        assert!(line(0.0, 0.0, 1.0, 2.0).is_parallel(&line(3.0, 0.0, -2.0, -4.0)));
        assert!(!line(0.0, 0.0, 1.0, 2.0).is_parallel(&line(3.0, 0.0, 2.0, 4.5)));
    }

    #[test]
    fn intersection_of_axes_is_origin() {
        let x_axis = line(0.0, 0.0, 1.0, 0.0);
        let y_axis = line(0.0, 1.0, 0.0, 1.0);
        let p = Line::intersection(&x_axis, &y_axis).unwrap();
        assert_eq!(p, Point2::new(0.0, 0.0));
    }

    #[test]
    fn intersection_of_diagonal_and_vertical() {
        let diagonal = line(0.0, 0.0, 1.0, 1.0);
        let vertical = line(2.0, 0.0, 0.0, 1.0);
        let p = diagonal.intersection(&vertical).unwrap();
        assert_relative_eq!(p, Point2::new(2.0, 2.0));
    }

    #[test]
    fn intersection_lies_on_both_lines() {
        let l0 = line(-1.0, 3.0, 2.0, 0.5);
        let l1 = line(4.0, -2.0, -1.0, 3.0);
        let p = l0.intersection(&l1).unwrap();
        let on_l0 = (p - l0.point()).cross(l0.direction());
        let on_l1 = (p - l1.point()).cross(l1.direction());
        assert!(on_l0.abs() < 1e-9, "on_l0={on_l0}");
        assert!(on_l1.abs() < 1e-9, "on_l1={on_l1}");
        assert_relative_eq!(p, l1.intersection(&l0).unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn intersection_of_perpendicular_through_point() {
        // Foot of the perpendicular from (3, 4) onto the x axis.
        let x_axis = line(0.0, 0.0, 1.0, 0.0);
        let perp = x_axis.perpendicular_through(Point2::new(3.0, 4.0));
        let foot = x_axis.intersection(&perp).unwrap();
        assert_relative_eq!(foot, Point2::new(3.0, 0.0));
    }

    #[test]
    fn intersection_of_parallel_lines_fails() {
        let l0 = line(0.0, 0.0, 1.0, 1.0);
        let l1 = l0.parallel_through(Point2::new(0.0, 1.0));
        assert_eq!(
            l0.intersection(&l1).unwrap_err(),
            Error::Geometry(GeometryError::ParallelLines)
        );
        // Coincident lines are parallel too.
        assert!(l0.intersection(&l0).is_err());
    }

    #[test]
    fn degenerate_direction_is_parallel_to_everything() {
        let point = line(1.0, 1.0, 0.0, 0.0);
        let err = point.intersection(&line(0.0, 0.0, 1.0, 0.0)).unwrap_err();
        assert_ne!(err, Error::Algebra(AlgebraError::SingularMatrix));
        assert_eq!(err, Error::Geometry(GeometryError::ParallelLines));
    }
}
