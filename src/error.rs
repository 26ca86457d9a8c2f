use thiserror::Error as ThisError;

/// Top-level error type for the linalg crate.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Algebra(#[from] AlgebraError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by vector and matrix arithmetic.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum AlgebraError {
    #[error("dimension mismatch in {operation}: expected {expected}, found {found}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("not a square matrix: {width}x{height}")]
    NotSquare { width: usize, height: usize },

    #[error("minor index (col {col}, row {row}) is out of bounds for a matrix of order {size}")]
    IndexOutOfBounds { col: usize, row: usize, size: usize },

    #[error("singular matrix: determinant is zero")]
    SingularMatrix,

    #[error("cofactor expansion of order {order} exceeds the maximum of {max}")]
    ExpansionTooLarge { order: usize, max: usize },
}

/// Errors raised by the 2D geometry layer.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum GeometryError {
    #[error("lines are parallel and have no single intersection")]
    ParallelLines,
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl AlgebraError {
    pub(crate) fn mismatch(operation: &'static str, expected: usize, found: usize) -> Self {
        Self::DimensionMismatch {
            operation,
            expected,
            found,
        }
    }
}
