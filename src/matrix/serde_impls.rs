/* ************************************************************************ **
** This file is part of dmat, and is licensed under EITHER the MIT license  **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! A matrix is serialized as its grid of rows.

use crate::{Matrix, Grid};

use serde::{Serialize, Serializer, Deserialize, Deserializer};
use serde::de::Error as _;
use serde::ser::SerializeSeq;

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>
    {
        let mut seq = serializer.serialize_seq(Some(self.num_rows()))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>
    {
        let grid = Grid::deserialize(deserializer)?;
        Matrix::from_grid(&grid).map_err(D::Error::custom)
    }
}
