/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Equality is exact and element-wise.  Ordering goes by determinant.
//!
//! The ordering is a preorder on determinants intersected with equality:
//! two different matrices with the same determinant are neither greater
//! nor less than one another, so `PartialOrd` returns `None` for them.

use crate::{Matrix, Result};

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool
    { self.dims() == other.dims() && self.data == other.data }
}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        self.dims().hash(state);
        for &x in &self.data {
            // -0.0 == 0.0, so they must hash alike
            let bits = match x == 0.0 {
                true => 0u64,
                false => x.to_bits(),
            };
            bits.hash(state);
        }
    }
}

impl Matrix {
    /// Same shape and exactly equal elements; no tolerance.
    pub fn equals(&self, other: &Matrix) -> bool
    { self == other }

    /// Compare by determinant, with equality taking precedence.
    ///
    /// Both determinants are computed before anything else, so this fails for
    /// non-square input even when the two matrices are equal.
    ///
    /// * `Some(Equal)` if the matrices are equal.
    /// * `Some(Greater)`/`Some(Less)` if they differ and so do their determinants.
    /// * `None` if they differ but the determinants do not (or either is NaN).
    pub fn compare_by_determinant(&self, other: &Matrix) -> Result<Option<Ordering>>
    {
        let det_a = self.determinant()?;
        let det_b = other.determinant()?;
        if self == other {
            return Ok(Some(Ordering::Equal));
        }
        Ok(match det_a.partial_cmp(&det_b) {
            Some(Ordering::Equal) | None => None,
            ord => ord,
        })
    }

    pub fn is_greater(&self, other: &Matrix) -> Result<bool>
    { Ok(self.compare_by_determinant(other)? == Some(Ordering::Greater)) }

    pub fn is_less(&self, other: &Matrix) -> Result<bool>
    { Ok(self.compare_by_determinant(other)? == Some(Ordering::Less)) }

    pub fn is_less_or_equal(&self, other: &Matrix) -> Result<bool>
    {
        let ord = self.compare_by_determinant(other)?;
        Ok(ord == Some(Ordering::Less) || ord == Some(Ordering::Equal))
    }

    pub fn is_greater_or_equal(&self, other: &Matrix) -> Result<bool>
    {
        let ord = self.compare_by_determinant(other)?;
        Ok(ord == Some(Ordering::Greater) || ord == Some(Ordering::Equal))
    }
}

/// `None` for incomparable pairs, and for unequal non-square operands.
///
/// Unlike [`Matrix::compare_by_determinant`], equal matrices are always
/// `Some(Equal)` here, so that `a == b` agrees with `a <= b && a >= b`.
impl PartialOrd for Matrix {
    fn partial_cmp(&self, other: &Matrix) -> Option<Ordering>
    {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.compare_by_determinant(other).ok().and_then(|ord| ord)
    }
}
