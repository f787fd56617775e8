/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::Matrix;

use dmat_assert_close::{CheckClose, CheckCloseError, Tolerances};

/// Element-wise, so `assert_close!` works on matrices.  Panics on a shape mismatch.
impl CheckClose for Matrix {
    fn check_close(&self, other: &Matrix, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        assert_eq!(self.dims(), other.dims(), "shape mismatch in check_close");
        self.to_grid().check_close(&other.to_grid(), tol)
    }
}
