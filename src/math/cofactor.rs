//! Determinant, adjoint and inverse by recursive cofactor (Laplace) expansion.
//!
//! `cofactor(col, row) = (-1)^(col + row) * det(minor(col, row))`, where the
//! minor drops vector `col` and coordinate `row`. The determinant expands
//! along the first vector:
//!
//! ```text
//! det(M) = Σ_row M[0][row] * cofactor(0, row)
//! ```
//!
//! Base cases: the 0×0 matrix has determinant 1 and a 1×1 matrix returns its
//! single element. Expansion is O(n!), so orders above
//! [`MAX_EXPANSION_ORDER`] are rejected.

use tracing::{debug, trace};

use crate::error::{AlgebraError, Result};

use super::{Matrix, Vector, MAX_EXPANSION_ORDER};

impl Matrix {
    /// Submatrix with vector `col` and coordinate `row` removed.
    ///
    /// # Errors
    ///
    /// - `AlgebraError::NotSquare` if the matrix is not square
    /// - `AlgebraError::IndexOutOfBounds` if `col` or `row` is not below the order
    pub fn minor(&self, col: usize, row: usize) -> Result<Self> {
        self.check_index(col, row)?;
        Ok(self.minor_unchecked(col, row))
    }

    /// Signed determinant of [`Matrix::minor`].
    ///
    /// # Errors
    ///
    /// - `AlgebraError::NotSquare` if the matrix is not square
    /// - `AlgebraError::IndexOutOfBounds` if `col` or `row` is not below the order
    /// - `AlgebraError::ExpansionTooLarge` if the order exceeds [`MAX_EXPANSION_ORDER`]
    pub fn cofactor(&self, col: usize, row: usize) -> Result<f64> {
        self.check_expandable()?;
        self.check_index(col, row)?;
        Ok(cofactor_unchecked(self, col, row))
    }

    /// Determinant by cofactor expansion along the first vector.
    ///
    /// # Errors
    ///
    /// - `AlgebraError::NotSquare` if the matrix is not square
    /// - `AlgebraError::ExpansionTooLarge` if the order exceeds [`MAX_EXPANSION_ORDER`]
    pub fn determinant(&self) -> Result<f64> {
        let order = self.check_expandable()?;
        trace!(order, "determinant by cofactor expansion");
        Ok(determinant_unchecked(self))
    }

    /// Adjugate: the transpose of the cofactor matrix.
    ///
    /// A 1×1 matrix has adjoint `[[1]]` and the 0×0 matrix is its own adjoint.
    ///
    /// # Errors
    ///
    /// - `AlgebraError::NotSquare` if the matrix is not square
    /// - `AlgebraError::ExpansionTooLarge` if the order exceeds [`MAX_EXPANSION_ORDER`]
    pub fn adjoint(&self) -> Result<Self> {
        let order = self.check_expandable()?;
        if order <= 1 {
            return Ok(Self::identity(order));
        }
        trace!(order, "adjoint by cofactor expansion");
        let cofactors = Self::from_columns_unchecked(
            (0..order)
                .map(|col| {
                    Vector::new(
                        (0..order)
                            .map(|row| cofactor_unchecked(self, col, row))
                            .collect(),
                    )
                })
                .collect(),
        );
        Ok(cofactors.transpose())
    }

    /// Inverse, `adjoint / determinant`.
    ///
    /// # Errors
    ///
    /// - `AlgebraError::NotSquare` if the matrix is not square
    /// - `AlgebraError::SingularMatrix` if the determinant is zero, subnormal or not finite
    /// - `AlgebraError::ExpansionTooLarge` if the order exceeds [`MAX_EXPANSION_ORDER`]
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if !det.is_normal() {
            debug!(det, order = self.width(), "refusing to invert singular matrix");
            return Err(AlgebraError::SingularMatrix.into());
        }
        Ok(self.adjoint()?.scale(1.0 / det))
    }

    /// Returns the order of a square matrix small enough to expand.
    fn check_expandable(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                width: self.width(),
                height: self.height(),
            }
            .into());
        }
        let order = self.width();
        if order > MAX_EXPANSION_ORDER {
            return Err(AlgebraError::ExpansionTooLarge {
                order,
                max: MAX_EXPANSION_ORDER,
            }
            .into());
        }
        Ok(order)
    }

    fn check_index(&self, col: usize, row: usize) -> Result<()> {
        if !self.is_square() {
            return Err(AlgebraError::NotSquare {
                width: self.width(),
                height: self.height(),
            }
            .into());
        }
        let size = self.width();
        if col >= size || row >= size {
            return Err(AlgebraError::IndexOutOfBounds { col, row, size }.into());
        }
        Ok(())
    }

    fn minor_unchecked(&self, col: usize, row: usize) -> Self {
        Self::from_columns_unchecked(
            self.columns()
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != col)
                .map(|(_, v)| v.without(row))
                .collect(),
        )
    }
}

fn sign(col: usize, row: usize) -> f64 {
    if (col + row) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

fn cofactor_unchecked(m: &Matrix, col: usize, row: usize) -> f64 {
    sign(col, row) * determinant_unchecked(&m.minor_unchecked(col, row))
}

fn determinant_unchecked(m: &Matrix) -> f64 {
    let Some(first) = m.columns().first() else {
        return 1.0;
    };
    if let [single] = first.coordinates() {
        return *single;
    }
    first
        .coordinates()
        .iter()
        .enumerate()
        .map(|(row, &value)| value * cofactor_unchecked(m, 0, row))
        .sum()
}
