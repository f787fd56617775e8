//! The demo's YAML config.
//!
//! ```yaml
//! scalar: 2.0
//! matrices:
//!   - name: A
//!     grid: [[1, 2], [3, 4]]
//!   - name: B
//!     grid: [[5, 6], [7, 8]]
//! ```

use crate::FailResult;
use dmat_matrix::{Matrix, Grid};

use std::io::Read;

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// Factor for the scalar multiplication section.
    #[serde(default = "self::defaults::scalar")]
    pub scalar: f64,
    /// The first two take part in the binary operations.
    pub matrices: Vec<NamedGrid>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NamedGrid {
    pub name: String,
    pub grid: Grid,
}

mod defaults {
    pub(crate) fn scalar() -> f64 { 2.0 }
}

/// Settings whose grids have all been turned into matrices.
///
/// Only [`Settings::validate`] can build one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSettings {
    scalar: f64,
    // invariant: len >= 2
    matrices: Vec<(String, Matrix)>,
}

impl ValidatedSettings {
    pub fn scalar(&self) -> f64 { self.scalar }
    pub fn matrices(&self) -> &[(String, Matrix)] { &self.matrices }

    /// The two matrices used as operands of the binary operations.
    pub fn operands(&self) -> (&(String, Matrix), &(String, Matrix))
    { (&self.matrices[0], &self.matrices[1]) }
}

impl Settings {
    pub fn from_reader<R: Read>(r: R) -> FailResult<Self>
    { Ok(serde_yaml::from_reader(r)?) }

    pub fn from_yaml_str(s: &str) -> FailResult<Self>
    { Ok(serde_yaml::from_str(s)?) }

    /// The two matrices from the classic demo.
    pub fn sample() -> Self
    { Settings {
        scalar: defaults::scalar(),
        matrices: vec![
            NamedGrid { name: "A".into(), grid: vec![vec![1.0, 2.0], vec![3.0, 4.0]] },
            NamedGrid { name: "B".into(), grid: vec![vec![5.0, 6.0], vec![7.0, 8.0]] },
        ],
    }}

    pub fn validate(self) -> FailResult<ValidatedSettings>
    {
        if self.matrices.len() < 2 {
            bail!("config needs at least two matrices (found {})", self.matrices.len());
        }
        if !self.scalar.is_finite() {
            bail!("scalar must be finite (got {})", self.scalar);
        }

        let mut matrices: Vec<(String, Matrix)> = Vec::with_capacity(self.matrices.len());
        for NamedGrid { name, grid } in self.matrices {
            if matrices.iter().any(|(existing, _)| existing == &name) {
                bail!("duplicate matrix name '{}'", name);
            }
            let matrix = Matrix::from_grid(&grid)
                .map_err(|e| format_err!("matrix '{}': {}", name, e))?;
            debug!("matrix '{}' is {}x{}", name, matrix.num_rows(), matrix.num_cols());
            matrices.push((name, matrix));
        }
        Ok(ValidatedSettings { scalar: self.scalar, matrices })
    }
}
