/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{Matrix, MatrixError, Result};

use itertools::zip_eq;
use std::ops::{Add, Mul};

impl Matrix {
    /// Element-wise sum of two matrices of identical shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix>
    {
        if self.dims() != other.dims() {
            return Err(MatrixError::mismatch("addition", self.dims(), other.dims()));
        }

        let data = zip_eq(&self.data, &other.data).map(|(a, b)| a + b).collect();
        Ok(Matrix { data, height: self.height, width: self.width })
    }

    /// Matrix product.
    ///
    /// Each output element is summed from zero in order of increasing inner
    /// index, so results are reproducible down to the last bit.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix>
    {
        if self.width != other.height {
            return Err(MatrixError::mismatch("multiplication", self.dims(), other.dims()));
        }

        let mut data = Vec::with_capacity(self.height * other.width);
        for a_row in self.rows() {
            for c in 0..other.width {
                let mut sum = 0.0;
                for (t, a) in a_row.iter().enumerate() {
                    sum += a * other.data[t * other.width + c];
                }
                data.push(sum);
            }
        }
        Ok(Matrix { data, height: self.height, width: other.width })
    }

    pub fn scale(&self, scalar: f64) -> Matrix
    { Matrix {
        data: self.data.iter().map(|x| x * scalar).collect(),
        height: self.height,
        width: self.width,
    }}
}

// Operator sugar.  Shape errors panic, same as out-of-range indexing;
// use the named methods to get a `Result`.

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Matrix
    { Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{}", e)) }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Matrix
    { self.multiply(rhs).unwrap_or_else(|e| panic!("{}", e)) }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Matrix
    { self.scale(rhs) }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix
    {
        for x in &mut self.data {
            *x *= rhs;
        }
        self
    }
}
