/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

pub type Result<T> = ::std::result::Result<T, MatrixError>;

/// Every way a matrix operation can refuse its input.
///
/// Shapes are `(rows, columns)`.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum MatrixError {
    #[fail(display = "matrix dimensions must be positive (got {}x{})", rows, columns)]
    InvalidDimension { rows: usize, columns: usize },

    #[fail(display = "a {}x{} matrix does not fit in memory", rows, columns)]
    TooLarge { rows: usize, columns: usize },

    #[fail(display = "replacement element buffer cannot be absent")]
    NullBuffer,

    #[fail(display = "matrix cannot be absent")]
    NullMatrix,

    #[fail(display = "incompatible shapes for {}: {:?} and {:?}", op, left, right)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[fail(display = "determinant requires a square matrix (got {}x{})", rows, columns)]
    NotSquare { rows: usize, columns: usize },

    #[fail(display = "ragged grid: row {} has {} elements, expected {}", row, actual, expected)]
    RaggedGrid { row: usize, expected: usize, actual: usize },

    #[fail(display = "buffer of length {} cannot fill a matrix of {} elements", actual, expected)]
    BufferLength { expected: usize, actual: usize },
}

impl MatrixError {
    pub(crate) fn mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self
    { MatrixError::DimensionMismatch { op, left, right } }
}
