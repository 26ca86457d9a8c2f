use std::fmt;
use std::ops::Neg;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{AlgebraError, Result};

use super::{Matrix, TOLERANCE};

/// An immutable N-dimensional displacement.
///
/// The dimension is fixed at construction. Every operation returns a new
/// vector; binary operations require both operands to have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vector {
    coordinates: Vec<f64>,
}

impl Vector {
    /// Creates a vector from its coordinates. An empty vector is allowed.
    #[must_use]
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self { coordinates }
    }

    /// Creates the zero vector of the given dimension.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    /// Displacement from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the points differ in length.
    pub fn from_points(end: &Point, start: &Point) -> Result<Self> {
        check_len("vector from points", start.len(), end.len())?;
        Ok(Self::new(
            end.coordinates
                .iter()
                .zip(&start.coordinates)
                .map(|(e, s)| e - s)
                .collect(),
        ))
    }

    /// Displacement from the origin to `end`.
    #[must_use]
    pub fn from_point(end: &Point) -> Self {
        Self::new(end.coordinates.clone())
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Returns the dimension of the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns `true` for the zero-dimensional vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns the coordinate at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.coordinates.get(index).copied()
    }

    /// Negates every coordinate.
    #[must_use]
    pub fn opposite(&self) -> Self {
        self.map(|w| -w)
    }

    /// Multiplies every coordinate by `value`.
    #[must_use]
    pub fn scale(&self, value: f64) -> Self {
        self.map(|w| value * w)
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the lengths differ.
    pub fn sum(&self, other: &Self) -> Result<Self> {
        check_len("vector sum", self.len(), other.len())?;
        Ok(Self::new(
            self.coordinates
                .iter()
                .zip(&other.coordinates)
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    /// Element-wise difference, `self - other`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the lengths differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.sum(&other.opposite())
    }

    /// Inner product.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<f64> {
        check_len("dot product", self.len(), other.len())?;
        Ok(self.dot_unchecked(other))
    }

    /// Euclidean norm. Never negative.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.coordinates.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Row-vector product `selfᵀ × m`.
    ///
    /// Entry `j` of the result is the dot product of `self` with column `j`
    /// of `m`. For the column-vector product `m × self` use
    /// [`Matrix::mul_vector`].
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if `self.len() != m.height()`.
    pub fn mul_matrix(&self, m: &Matrix) -> Result<Self> {
        check_len("vector times matrix", m.height(), self.len())?;
        Ok(Self::new(
            m.columns()
                .iter()
                .map(|column| self.dot_unchecked(column))
                .collect(),
        ))
    }

    pub(crate) fn dot_unchecked(&self, other: &Self) -> f64 {
        self.coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(a, b)| a * b)
            .sum()
    }

    pub(crate) fn without(&self, index: usize) -> Self {
        Self::new(
            self.coordinates
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != index)
                .map(|(_, &w)| w)
                .collect(),
        )
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(self.coordinates.iter().map(|&w| f(w)).collect())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(coordinates: Vec<f64>) -> Self {
        Self::new(coordinates)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(coordinates: [f64; N]) -> Self {
        Self::new(coordinates.to_vec())
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.opposite()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.opposite()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, &self.coordinates)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> f64 {
        TOLERANCE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.len() == other.len()
            && self
                .coordinates
                .iter()
                .zip(&other.coordinates)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

/// An immutable N-dimensional position.
///
/// Structurally identical to [`Vector`] but a location rather than a
/// displacement: points are moved by vectors, not added together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    coordinates: Vec<f64>,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self { coordinates }
    }

    /// Returns the coordinates.
    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Returns the dimension of the point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns `true` for the zero-dimensional point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Returns the point offset by `vector`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the lengths differ.
    pub fn translate(&self, vector: &Vector) -> Result<Self> {
        check_len("point translation", self.len(), vector.len())?;
        Ok(Self::new(
            self.coordinates
                .iter()
                .zip(vector.coordinates())
                .map(|(p, v)| p + v)
                .collect(),
        ))
    }
}

impl From<Vec<f64>> for Point {
    fn from(coordinates: Vec<f64>) -> Self {
        Self::new(coordinates)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coordinates(f, &self.coordinates)
    }
}

fn check_len(operation: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(AlgebraError::mismatch(operation, expected, found).into())
    }
}

fn write_coordinates(f: &mut fmt::Formatter<'_>, coordinates: &[f64]) -> fmt::Result {
    write!(f, "[")?;
    for (i, w) in coordinates.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{w}")?;
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;

    fn v(coords: &[f64]) -> Vector {
        Vector::new(coords.to_vec())
    }

    #[test]
    fn sum_adds_coordinates() {
        let s = v(&[1.0, 2.0]).sum(&v(&[3.0, 4.0])).unwrap();
        assert_eq!(s, v(&[4.0, 6.0]));
    }

    #[test]
    fn sum_with_opposite_is_zero() {
        let a = v(&[1.5, -2.0, 7.25]);
        let z = a.sum(&a.opposite()).unwrap();
        assert_eq!(z, Vector::zeros(3));
    }

    #[test]
    fn sum_then_subtract_restores_vector() {
        let a = v(&[0.1, 0.2, 0.3]);
        let b = v(&[10.0, -3.3, 1e-3]);
        let back = a.sum(&b).unwrap().subtract(&b).unwrap();
        assert_relative_eq!(back, a);
    }

    #[test]
    fn sum_length_mismatch() {
        let err = v(&[1.0, 2.0]).sum(&v(&[1.0, 2.0, 3.0])).unwrap_err();
        assert!(matches!(
            err,
            Error::Algebra(AlgebraError::DimensionMismatch {
                expected: 2,
                found: 3,
                ..
            })
        ));
    }

    #[test]
    fn subtract_length_mismatch() {
        assert!(v(&[1.0]).subtract(&Vector::default()).is_err());
    }

    #[test]
    fn empty_vector_is_total() {
        let e = Vector::default();
        assert!(e.is_empty());
        assert_eq!(e.opposite(), e);
        assert_eq!(e.scale(3.0), e);
        assert_eq!(e.sum(&e).unwrap(), e);
        assert!(e.norm().abs() < TOLERANCE);
    }

    #[test]
    fn scale_and_neg() {
        assert_eq!(v(&[1.0, -2.0]).scale(2.5), v(&[2.5, -5.0]));
        assert_eq!(-v(&[1.0, -2.0]), v(&[-1.0, 2.0]));
    }

    #[test]
    fn norm_is_euclidean() {
        assert!((v(&[3.0, 4.0]).norm() - 5.0).abs() < TOLERANCE);
        assert!((v(&[-1.0, -2.0, 2.0]).norm() - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn dot_product() {
        let d = v(&[1.0, 2.0, 3.0]).dot(&v(&[4.0, -5.0, 6.0])).unwrap();
        assert!((d - 12.0).abs() < TOLERANCE, "d={d}");
        assert!(v(&[1.0]).dot(&v(&[1.0, 2.0])).is_err());
    }

    #[test]
    fn from_points_is_end_minus_start() {
        let start = Point::new(vec![1.0, 1.0]);
        let end = Point::new(vec![4.0, -1.0]);
        assert_eq!(Vector::from_points(&end, &start).unwrap(), v(&[3.0, -2.0]));
        assert_eq!(Vector::from_point(&end), v(&[4.0, -1.0]));
        assert!(Vector::from_points(&end, &Point::new(vec![0.0])).is_err());
    }

    #[test]
    fn mul_matrix_is_row_vector_product() {
        // Columns (1, 3) and (2, 4): [1 2; 3 4] in row notation.
        let m = Matrix::from_rows(vec![v(&[1.0, 2.0]), v(&[3.0, 4.0])]).unwrap();
        let r = v(&[1.0, 1.0]).mul_matrix(&m).unwrap();
        assert_eq!(r, v(&[4.0, 6.0]));
        assert!(v(&[1.0, 1.0, 1.0]).mul_matrix(&m).is_err());
    }

    #[test]
    fn point_translate() {
        let p = Point::new(vec![1.0, 2.0, 3.0]);
        let q = p.translate(&v(&[1.0, -2.0, 0.5])).unwrap();
        assert_eq!(q, Point::new(vec![2.0, 0.0, 3.5]));
        assert!(p.translate(&v(&[1.0])).is_err());
    }

    #[test]
    fn display_is_bracketed() {
        assert_eq!(v(&[1.0, 2.0, 3.0]).to_string(), "[1, 2, 3]");
        assert_eq!(v(&[0.5, -1.0]).to_string(), "[0.5, -1]");
        assert_eq!(Vector::default().to_string(), "[]");
        assert_eq!(Point::new(vec![7.0]).to_string(), "[7]");
    }

    #[test]
    fn approx_rejects_different_lengths() {
        assert!(!approx::relative_eq!(v(&[1.0]), v(&[1.0, 0.0])));
    }
}
