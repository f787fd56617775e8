//! Umbrella crate for the dmat workspace.
//!
//! The matrix type itself lives in `dmat-matrix`; this just re-exports it
//! so that downstream code and the tests under `tests/` need one dependency.

pub use dmat_matrix::{Matrix, MatrixError, MatrixLike, Grid, Result, grid_of};
pub use dmat_matrix::LARGE_DETERMINANT_ORDER;

pub mod tasks {
    pub use dmat_tasks::{Settings, ValidatedSettings, NamedGrid, write_report};
}
