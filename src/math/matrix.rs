use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{AlgebraError, Error, Result};

use super::{Vector, TOLERANCE};

/// An immutable rectangular grid of numbers stored as column vectors.
///
/// `width` is the number of vectors and `height` their common length (0 for
/// a matrix without vectors). Element `(col, row)` is coordinate `row` of
/// vector `col`.
///
/// # Multiplication convention
///
/// Vectors are columns and `a.multiply(&b)` is the standard product `a × b`.
/// The two matrix–vector products are separate operations:
/// [`Matrix::mul_vector`] computes `m × v` and [`Vector::mul_matrix`]
/// computes `vᵀ × m`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    vectors: Vec<Vector>,
}

impl Matrix {
    /// Creates a matrix from its column vectors.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the vectors differ in length.
    pub fn new(vectors: Vec<Vector>) -> Result<Self> {
        let height = vectors.first().map_or(0, Vector::len);
        if let Some(bad) = vectors.iter().find(|v| v.len() != height) {
            return Err(AlgebraError::mismatch("matrix construction", height, bad.len()).into());
        }
        Ok(Self { vectors })
    }

    /// Creates a matrix from row vectors, i.e. the transpose of [`Matrix::new`].
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Self> {
        Ok(Self::new(rows)?.transpose())
    }

    /// The `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self::from_columns_unchecked(
            (0..n)
                .map(|col| {
                    Vector::new((0..n).map(|row| if row == col { 1.0 } else { 0.0 }).collect())
                })
                .collect(),
        )
    }

    pub(crate) fn from_columns_unchecked(vectors: Vec<Vector>) -> Self {
        Self { vectors }
    }

    /// Returns the column vectors.
    #[must_use]
    pub fn columns(&self) -> &[Vector] {
        &self.vectors
    }

    /// Returns column `col`, if any.
    #[must_use]
    pub fn column(&self, col: usize) -> Option<&Vector> {
        self.vectors.get(col)
    }

    /// Returns element `(col, row)`, if any.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<f64> {
        self.vectors.get(col).and_then(|v| v.get(row))
    }

    /// Number of vectors.
    #[must_use]
    pub fn width(&self) -> usize {
        self.vectors.len()
    }

    /// Common length of the vectors.
    #[must_use]
    pub fn height(&self) -> usize {
        self.vectors.first().map_or(0, Vector::len)
    }

    /// Returns `true` if `width == height`.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.width() == self.height()
    }

    /// Multiplies every element by `value`.
    #[must_use]
    pub fn scale(&self, value: f64) -> Self {
        Self::from_columns_unchecked(self.vectors.iter().map(|v| v.scale(value)).collect())
    }

    /// Swaps rows and columns: `result[i][j] = self[j][i]`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_columns_unchecked(
            (0..self.height())
                .map(|row| Vector::new(self.row_values(row).collect()))
                .collect(),
        )
    }

    /// Matrix product `self × other`.
    ///
    /// The result has `other.width()` vectors of length `self.height()`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if `self.width() != other.height()`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.width() != other.height() {
            return Err(
                AlgebraError::mismatch("matrix multiplication", self.width(), other.height()).into(),
            );
        }
        Ok(Self::from_columns_unchecked(
            other
                .vectors
                .iter()
                .map(|column| self.mul_vector_unchecked(column))
                .collect(),
        ))
    }

    /// Column-vector product `self × v`.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DimensionMismatch` if `v.len() != self.width()`.
    pub fn mul_vector(&self, v: &Vector) -> Result<Vector> {
        if v.len() != self.width() {
            return Err(AlgebraError::mismatch("matrix times vector", self.width(), v.len()).into());
        }
        Ok(self.mul_vector_unchecked(v))
    }

    fn mul_vector_unchecked(&self, v: &Vector) -> Vector {
        Vector::new(
            (0..self.height())
                .map(|row| {
                    self.row_values(row)
                        .zip(v.coordinates())
                        .map(|(a, b)| a * b)
                        .sum()
                })
                .collect(),
        )
    }

    fn row_values(&self, row: usize) -> impl Iterator<Item = f64> + '_ {
        self.vectors
            .iter()
            .map(move |v| v.coordinates()[row])
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vectors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.width() == other.width()
            && self
                .vectors
                .iter()
                .zip(&other.vectors)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix {
    fn default_max_relative() -> f64 {
        TOLERANCE
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.width() == other.width()
            && self
                .vectors
                .iter()
                .zip(&other.vectors)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl From<&Matrix> for nalgebra::DMatrix<f64> {
    fn from(m: &Matrix) -> Self {
        nalgebra::DMatrix::from_fn(m.height(), m.width(), |row, col| {
            m.vectors[col].coordinates()[row]
        })
    }
}

impl From<&nalgebra::DMatrix<f64>> for Matrix {
    fn from(m: &nalgebra::DMatrix<f64>) -> Self {
        Self::from_columns_unchecked(
            m.column_iter()
                .map(|column| Vector::new(column.iter().copied().collect()))
                .collect(),
        )
    }
}

/// A [`Matrix`] validated to have `width == height`.
///
/// Shares storage with `Matrix`; square-only operations are infallible with
/// respect to shape but may still report a singular matrix or an oversized
/// expansion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SquareMatrix(Matrix);

impl SquareMatrix {
    /// Creates a square matrix from its column vectors.
    ///
    /// # Errors
    ///
    /// - `AlgebraError::DimensionMismatch` if the vectors differ in length
    /// - `AlgebraError::NotSquare` if the vector count differs from their length
    pub fn new(vectors: Vec<Vector>) -> Result<Self> {
        Self::try_from(Matrix::new(vectors)?)
    }

    /// The `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self(Matrix::identity(n))
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn order(&self) -> usize {
        self.0.width()
    }

    #[must_use]
    pub fn as_matrix(&self) -> &Matrix {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> Matrix {
        self.0
    }

    #[must_use]
    pub fn scale(&self, value: f64) -> Self {
        Self(self.0.scale(value))
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// See [`Matrix::determinant`].
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::ExpansionTooLarge` for oversized matrices.
    pub fn determinant(&self) -> Result<f64> {
        self.0.determinant()
    }

    /// See [`Matrix::adjoint`].
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::ExpansionTooLarge` for oversized matrices.
    pub fn adjoint(&self) -> Result<Self> {
        self.0.adjoint().map(Self)
    }

    /// See [`Matrix::inverse`].
    ///
    /// # Errors
    ///
    /// - `AlgebraError::SingularMatrix` if the determinant is zero
    /// - `AlgebraError::ExpansionTooLarge` for oversized matrices
    pub fn inverse(&self) -> Result<Self> {
        self.0.inverse().map(Self)
    }
}

impl TryFrom<Matrix> for SquareMatrix {
    type Error = Error;

    fn try_from(m: Matrix) -> Result<Self> {
        if m.is_square() {
            Ok(Self(m))
        } else {
            Err(AlgebraError::NotSquare {
                width: m.width(),
                height: m.height(),
            }
            .into())
        }
    }
}

impl From<SquareMatrix> for Matrix {
    fn from(m: SquareMatrix) -> Self {
        m.0
    }
}

impl AsRef<Matrix> for SquareMatrix {
    fn as_ref(&self) -> &Matrix {
        &self.0
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
