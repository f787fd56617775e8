/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A dense, rectangular matrix of `f64`.
//!
//! Everything here allocates a fresh result; operands are never modified.
//! Shapes are checked up front and reported as [`MatrixError`]s, while
//! out-of-range indexing panics like it does for slices.

#[macro_use] extern crate failure;
#[macro_use] extern crate log;
#[cfg_attr(test, macro_use)] extern crate dmat_assert_close;
extern crate itertools;
#[cfg(feature = "serde")] extern crate serde;
#[cfg(test)] extern crate rand;

pub use crate::errors::{MatrixError, Result};
mod errors;

pub use crate::matrix::{Matrix, Grid, ContiguousRows, grid_of};
mod matrix;

pub use crate::like::MatrixLike;
mod like;

pub use crate::det::LARGE_DETERMINANT_ORDER;
mod det;

mod ops;
mod cmp;
mod close;

#[cfg(feature = "serde")]
mod serde_impls;
