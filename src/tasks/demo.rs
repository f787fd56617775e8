//! A guided tour through every matrix operation, printed as plain text.

use crate::FailResult;
use crate::config::ValidatedSettings;
use dmat_matrix::{Matrix, MatrixError, Grid, grid_of};

use itertools::Itertools;
use std::convert::TryFrom;
use std::fmt::Display;
use std::io::Write;

/// Shape errors are part of the tour, so they are printed rather than returned.
/// Only I/O errors end the report early.
pub fn write_report<W: Write>(out: &mut W, settings: &ValidatedSettings) -> FailResult<()>
{Ok({
    let ((a_name, a), (b_name, b)) = settings.operands();
    let mut a = a.clone();

    info!("writing report for {} matrices", settings.matrices().len());

    for (name, m) in settings.matrices() {
        writeln!(out, "Matrix {}:", name)?;
        writeln!(out, "{}", m)?;
    }
    writeln!(out, "Default matrix:")?;
    writeln!(out, "{}", Matrix::default())?;

    debug!("arithmetic on '{}' and '{}'", a_name, b_name);
    writeln!(out, "{} + {}:", a_name, b_name)?;
    write_outcome(out, a.add(b))?;
    writeln!(out, "{} * {}:", a_name, b_name)?;
    write_outcome(out, a.multiply(b))?;
    writeln!(out, "{} * {}:", a_name, settings.scalar())?;
    writeln!(out, "{}", a.scale(settings.scalar()))?;

    for (name, m) in settings.matrices() {
        writeln!(out, "Determinant of {}:", name)?;
        write_outcome(out, m.determinant())?;
    }

    match a.is_valid() {
        true => writeln!(out, "Matrix {} is non-empty and has a valid size.", a_name)?,
        false => writeln!(out, "Matrix {} is empty or has invalid dimensions.", a_name)?,
    }
    writeln!(out)?;

    writeln!(out, "Grid created from matrix {}:", b_name)?;
    write_grid(out, &grid_of(Some(b))?)?;
    writeln!(out)?;

    let grid: Grid = vec![vec![1.0, 1.0], vec![2.0, 1.0]];
    writeln!(out, "Matrix created from grid:")?;
    writeln!(out, "{}", Matrix::try_from(grid)?)?;

    let last = (a.num_rows() - 1, a.num_cols() - 1);
    writeln!(out, "Original value at {:?} in {}:", last, a_name)?;
    writeln!(out, "{}", a[last])?;
    writeln!(out)?;
    a[last] = 10.0;
    writeln!(out, "Updated matrix {}:", a_name)?;
    writeln!(out, "{}", a)?;

    let d = b.clone();
    writeln!(out, "{0} == copy of {0}?", b_name)?;
    writeln!(out, "{}", *b == d)?;
    writeln!(out, "{0} != copy of {0}?", b_name)?;
    writeln!(out, "{}", *b != d)?;
    writeln!(out, "{} == {}?", a_name, b_name)?;
    writeln!(out, "{}", a == *b)?;
    writeln!(out, "{} != {}?", a_name, b_name)?;
    writeln!(out, "{}", a != *b)?;

    let comparisons: [(&str, fn(&Matrix, &Matrix) -> Result<bool, MatrixError>); 4] = [
        (">", Matrix::is_greater),
        ("<", Matrix::is_less),
        (">=", Matrix::is_greater_or_equal),
        ("<=", Matrix::is_less_or_equal),
    ];
    for &(op, compare) in &comparisons {
        writeln!(out, "Is {} {} {}?", a_name, op, b_name)?;
        write_outcome(out, compare(&a, b))?;
    }
})}

fn write_outcome<W: Write, T: Display>(out: &mut W, outcome: Result<T, MatrixError>) -> FailResult<()>
{Ok({
    match outcome {
        Ok(value) => writeln!(out, "{}", value)?,
        Err(e) => {
            debug!("operation refused: {}", e);
            writeln!(out, "error: {}", e)?;
            writeln!(out)?;
        },
    }
})}

fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> FailResult<()>
{Ok({
    for row in grid {
        writeln!(out, "{}", row.iter().format_with("", |x, f| f(&format_args!("{} ", x))))?;
    }
})}
