/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{MatrixError, Result};

use std::convert::TryFrom;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Nested rows, as accepted by [`Matrix::from_grid`] and produced by [`Matrix::to_grid`].
pub type Grid = Vec<Vec<f64>>;

pub type ContiguousRows<'a> = std::slice::Chunks<'a, f64>;

/// Owned matrix type with C layout.
///
/// Both dimensions are always nonzero.  The shape is fixed at construction;
/// the only way to change it is to replace the whole grid through
/// [`MatrixLike::replace_grid`](crate::MatrixLike::replace_grid).
#[derive(Debug, Clone)]
pub struct Matrix {
    // c-contiguous, row-contiguous data
    pub(crate) data: Vec<f64>,
    // invariant: height * width == data.len()
    // invariant: height > 0 && width > 0
    pub(crate) height: usize,
    pub(crate) width: usize,
}

/// Number of elements in a matrix of this shape.
fn checked_size(height: usize, width: usize) -> Option<usize> {
    height.checked_mul(width)
        .filter(|&n| n <= isize::max_value() as usize / std::mem::size_of::<f64>())
}

fn check_dims(height: usize, width: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(MatrixError::InvalidDimension { rows: height, columns: width });
    }
    checked_size(height, width).ok_or(MatrixError::TooLarge { rows: height, columns: width })
}

impl Matrix {
    /// A zero-filled matrix.
    pub fn new(height: usize, width: usize) -> Result<Self>
    {
        let size = check_dims(height, width)?;
        Ok(Matrix { data: vec![0.0; size], height, width })
    }

    pub fn from_row_major_data((height, width): (usize, usize), data: Vec<f64>) -> Result<Self>
    {
        let size = check_dims(height, width)?;
        if data.len() != size {
            return Err(MatrixError::BufferLength { expected: size, actual: data.len() });
        }
        Ok(Matrix { data, height, width })
    }

    /// Copy the elements of a rectangular grid of rows.
    ///
    /// The width is taken from the first row.
    pub fn from_grid<R: AsRef<[f64]>>(grid: &[R]) -> Result<Self>
    {
        let height = grid.len();
        let width = grid.first().map_or(0, |row| row.as_ref().len());
        let size = check_dims(height, width)?;

        let mut data = Vec::with_capacity(size);
        for (r, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(MatrixError::RaggedGrid { row: r, expected: width, actual: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Matrix { data, height, width })
    }

    /// A copy of the elements as nested rows.
    ///
    /// This is always a copy; mutating it does not affect the matrix.
    pub fn to_grid(&self) -> Grid
    { self.rows().map(|row| row.to_vec()).collect() }
}

/// [`Matrix::to_grid`] for a matrix that may be absent.
pub fn grid_of(matrix: Option<&Matrix>) -> Result<Grid>
{ matrix.map(Matrix::to_grid).ok_or(MatrixError::NullMatrix) }

impl Default for Matrix {
    /// A 2x2 zero matrix.
    fn default() -> Self
    { Matrix { data: vec![0.0; 4], height: 2, width: 2 } }
}

impl Matrix {
    pub fn num_rows(&self) -> usize { self.height }
    pub fn num_cols(&self) -> usize { self.width }
    pub fn dims(&self) -> (usize, usize) { (self.height, self.width) }
    pub fn is_square(&self) -> bool { self.height == self.width }
    pub fn size(&self) -> usize { self.data.len() }

    pub fn row_major_data(&self) -> &[f64] { &self.data }
    pub fn row_major_data_mut(&mut self) -> &mut [f64] { &mut self.data }
    pub fn rows(&self) -> ContiguousRows { self.data.chunks(self.width) }

    /// Non-panicking element lookup.
    pub fn get(&self, row: usize, col: usize) -> Option<f64>
    {
        match row < self.height && col < self.width {
            true => Some(self.data[row * self.width + col]),
            false => None,
        }
    }

    /// Whether the matrix has a nonempty shape and a buffer to match.
    ///
    /// Every public constructor upholds this, so it can only be `false`
    /// for a value whose invariants were broken from inside this crate.
    pub fn is_valid(&self) -> bool
    {
        self.height > 0 && self.width > 0
            && checked_size(self.height, self.width) == Some(self.data.len())
    }

    #[inline(always)]
    fn flat_index(&self, (r, c): (usize, usize)) -> usize
    {
        // each axis separately, so that (0, width) can't wrap around to (1, 0)
        assert!(
            r < self.height && c < self.width,
            "index out of range: ({}, {}) in a {}x{} matrix", r, c, self.height, self.width,
        );
        r * self.width + c
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline(always)]
    fn index(&self, index: (usize, usize)) -> &f64
    { &self.data[self.flat_index(index)] }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64
    {
        let i = self.flat_index(index);
        &mut self.data[i]
    }
}

impl<'a> TryFrom<&'a [Vec<f64>]> for Matrix {
    type Error = MatrixError;

    fn try_from(grid: &'a [Vec<f64>]) -> Result<Self>
    { Matrix::from_grid(grid) }
}

impl TryFrom<Grid> for Matrix {
    type Error = MatrixError;

    fn try_from(grid: Grid) -> Result<Self>
    { Matrix::from_grid(&grid) }
}

impl From<Matrix> for Grid {
    fn from(m: Matrix) -> Grid
    { m.to_grid() }
}

/// One line per row, each element followed by a space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        for row in self.rows() {
            for x in row {
                write!(f, "{} ", x)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        for &(r, c) in &[(1, 1), (3, 4), (4, 3), (7, 1)] {
            let m = Matrix::new(r, c).unwrap();
            assert_eq!(m.dims(), (r, c));
            assert_eq!(m.size(), r * c);
            assert!(m.row_major_data().iter().all(|&x| x == 0.0));
            assert!(m.is_valid());
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Matrix::new(0, 3).unwrap_err(), MatrixError::InvalidDimension { rows: 0, columns: 3 });
        assert_eq!(Matrix::new(3, 0).unwrap_err(), MatrixError::InvalidDimension { rows: 3, columns: 0 });
        assert!(Matrix::new(0, 0).is_err());
    }

    #[test]
    fn oversized_shapes_are_rejected() {
        let huge = usize::max_value();
        assert_eq!(Matrix::new(huge, 2).unwrap_err(), MatrixError::TooLarge { rows: huge, columns: 2 });
        assert_eq!(Matrix::new(2, huge).unwrap_err(), MatrixError::TooLarge { rows: 2, columns: huge });
        assert_eq!(
            Matrix::from_row_major_data((huge, huge), vec![]).unwrap_err(),
            MatrixError::TooLarge { rows: huge, columns: huge },
        );

        // the element count fits in a usize, but not the bytes
        let rows = huge / 4;
        assert_eq!(Matrix::new(rows, 1).unwrap_err(), MatrixError::TooLarge { rows, columns: 1 });
    }

    #[test]
    fn is_valid_rejects_wrapped_sizes() {
        // the product of these wraps around to zero
        let half = usize::max_value().count_ones() / 2;
        let m = Matrix { data: vec![], height: 1 << half, width: 1 << half };
        assert!(!m.is_valid());
    }

    #[test]
    fn default_is_2x2_zero() {
        assert_eq!(Matrix::default(), Matrix::new(2, 2).unwrap());
    }

    #[test]
    fn from_grid() {
        let m = Matrix::from_grid(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m.row_major_data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn from_grid_errors() {
        let empty: &[Vec<f64>] = &[];
        assert_eq!(Matrix::from_grid(empty).unwrap_err(), MatrixError::InvalidDimension { rows: 0, columns: 0 });
        assert_eq!(Matrix::from_grid(&[Vec::<f64>::new()]).unwrap_err(), MatrixError::InvalidDimension { rows: 1, columns: 0 });
        assert_eq!(
            Matrix::from_grid(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err(),
            MatrixError::RaggedGrid { row: 1, expected: 2, actual: 1 },
        );
    }

    #[test]
    fn from_row_major_data() {
        let m = Matrix::from_row_major_data((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(
            Matrix::from_row_major_data((2, 2), vec![1.0]).unwrap_err(),
            MatrixError::BufferLength { expected: 4, actual: 1 },
        );
        assert!(Matrix::from_row_major_data((0, 2), vec![]).is_err());
    }

    #[test]
    fn clone_does_not_alias() {
        let a = Matrix::from_grid(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let mut b = a.clone();
        assert_eq!(a, b);
        b[(0, 0)] = 100.0;
        assert_eq!(a[(0, 0)], 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn grid_round_trip() {
        let grid = vec![vec![1.0, -2.5], vec![0.0, 4.0], vec![9.0, 1e-3]];
        let m = Matrix::try_from(grid.clone()).unwrap();
        assert_eq!(m.to_grid(), grid);
        assert_eq!(Matrix::from_grid(&m.to_grid()).unwrap(), m);
        assert_eq!(Grid::from(m), grid);
    }

    #[test]
    fn to_grid_is_a_copy() {
        let m = Matrix::from_grid(&[[1.0]]).unwrap();
        let mut grid = m.to_grid();
        grid[0][0] = 5.0;
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn grid_of_absent() {
        let m = Matrix::from_grid(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
        assert_eq!(grid_of(Some(&m)).unwrap(), vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(grid_of(None).unwrap_err(), MatrixError::NullMatrix);
    }

    #[test]
    fn index_set_and_get() {
        let mut m = Matrix::from_grid(&[[9.0, 10.0], [11.0, 12.0]]).unwrap();
        assert_eq!(m[(0, 1)], 10.0);
        m[(1, 1)] = 10.0;
        assert_eq!(m[(1, 1)], 10.0);
        assert_eq!(m.get(1, 1), Some(10.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn index_does_not_wrap_rows() {
        let m = Matrix::new(2, 2).unwrap();
        let _ = m[(0, 2)];
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn index_mut_out_of_range() {
        let mut m = Matrix::new(2, 3).unwrap();
        m[(2, 0)] = 1.0;
    }

    #[test]
    fn display() {
        let m = Matrix::from_grid(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.to_string(), "1 2 \n3 4 \n");

        let m = Matrix::from_grid(&[[0.5, -1.25, 1e21]]).unwrap();
        assert_eq!(m.to_string(), "0.5 -1.25 1000000000000000000000 \n");
    }
}
