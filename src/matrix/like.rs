/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, MatrixError, Grid, Result};

/// Shape and storage of a matrix, for code that only needs those.
///
/// There are deliberately no setters for the individual dimensions;
/// shape and elements can only be replaced together.
pub trait MatrixLike {
    fn num_rows(&self) -> usize;
    fn num_cols(&self) -> usize;
    fn row_major_data(&self) -> &[f64];

    /// Replace shape and elements with those of `grid`.
    ///
    /// On error, `self` is left untouched.
    fn replace_grid(&mut self, grid: Option<Grid>) -> Result<()>;

    fn dims(&self) -> (usize, usize)
    { (self.num_rows(), self.num_cols()) }

    fn grid(&self) -> Grid
    {
        match self.num_cols() {
            0 => vec![],
            width => self.row_major_data().chunks(width).map(|row| row.to_vec()).collect(),
        }
    }
}

impl MatrixLike for Matrix {
    fn num_rows(&self) -> usize { self.height }
    fn num_cols(&self) -> usize { self.width }
    fn row_major_data(&self) -> &[f64] { &self.data }

    fn replace_grid(&mut self, grid: Option<Grid>) -> Result<()>
    {
        let grid = grid.ok_or(MatrixError::NullBuffer)?;
        *self = Matrix::from_grid(&grid)?;
        Ok(())
    }
}
