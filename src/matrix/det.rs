/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Determinants by cofactor expansion.
//!
//! This is O(n!) and makes no attempt at numerical stability (no pivoting).
//! Fine for the small matrices it's meant for; hopeless past order ~10.

use crate::{Matrix, MatrixError, Result};

/// Requests for determinants of at least this order get a warning in the log.
pub const LARGE_DETERMINANT_ORDER: usize = 10;

impl Matrix {
    pub fn determinant(&self) -> Result<f64>
    {
        self.check_square()?;

        let n = self.height;
        if n >= LARGE_DETERMINANT_ORDER {
            warn!("cofactor determinant of order {} will take ~{}! steps", n, n);
        }
        trace!("determinant of order {}", n);
        Ok(self.cofactor_det())
    }

    /// The submatrix with one row and one column removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix>
    {
        self.check_square()?;
        if self.height == 1 {
            return Err(MatrixError::InvalidDimension { rows: 0, columns: 0 });
        }
        assert!(
            row < self.height && col < self.width,
            "index out of range: ({}, {}) in a {}x{} matrix", row, col, self.height, self.width,
        );
        Ok(self.minor_unchecked(row, col))
    }

    fn check_square(&self) -> Result<()>
    {
        match self.is_square() {
            true => Ok(()),
            false => Err(MatrixError::NotSquare { rows: self.height, columns: self.width }),
        }
    }

    // requires: square, n >= 2, indices in range
    fn minor_unchecked(&self, skip_row: usize, skip_col: usize) -> Matrix
    {
        let n = self.height;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for (r, row) in self.rows().enumerate() {
            if r == skip_row {
                continue;
            }
            // columns left of the removed one keep their index, those right of it shift down by one
            data.extend_from_slice(&row[..skip_col]);
            data.extend_from_slice(&row[skip_col + 1..]);
        }
        Matrix { data, height: n - 1, width: n - 1 }
    }

    // requires: square
    fn cofactor_det(&self) -> f64
    {
        let a = |r, c| self.data[r * self.width + c];
        match self.height {
            1 => a(0, 0),
            2 => a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0),
            n => {
                let mut det = 0.0;
                for k in 0..n {
                    let sign = match k % 2 {
                        0 => 1.0,
                        _ => -1.0,
                    };
                    det += sign * a(0, k) * self.minor_unchecked(0, k).cofactor_det();
                }
                det
            },
        }
    }
}
