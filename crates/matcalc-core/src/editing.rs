//! Helpers for matrix editors: resizing, random fill, clearing and the
//! editable size bound.
//!
//! None of these take part in the arithmetic itself. They produce the
//! matrices an editor hands to the kernel and, like the kernel, never modify
//! their input.

use rand::Rng;

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

/// Largest row or column count an editor accepts by default.
pub const DEFAULT_MAX_DIMENSION: usize = 99;

/// Default inclusive range for [`random_fill`].
pub const DEFAULT_RANDOM_RANGE: (i32, i32) = (-9, 9);

/// Resize to `rows x cols`, keeping the overlapping top-left block.
///
/// Cells outside the old shape are zero; cells outside the new shape are
/// dropped.
pub fn resize(m: &Matrix, rows: usize, cols: usize) -> Result<Matrix> {
    Matrix::from_fn(rows, cols, |i, j| m.get(i, j).unwrap_or(0.0))
}

/// `rows x cols` matrix of whole numbers drawn uniformly from `low..=high`.
/// Reversed bounds are swapped.
pub fn random_fill<R>(rows: usize, cols: usize, low: i32, high: i32, rng: &mut R) -> Result<Matrix>
where
    R: Rng + ?Sized,
{
    let (lo, hi) = if low <= high { (low, high) } else { (high, low) };
    Matrix::from_fn(rows, cols, |_, _| f64::from(rng.gen_range(lo..=hi)))
}

/// Zero matrix with the shape of `m`.
pub fn clear(m: &Matrix) -> Matrix {
    m.mapv(|_| 0.0)
}

/// Check that both dimensions of `m` lie in `1..=max`.
pub fn check_bounds(m: &Matrix, max: usize) -> Result<()> {
    let (rows, cols) = m.shape();
    check_shape(rows, cols, max)
}

/// Check a requested `rows x cols` shape against `1..=max` before any
/// matrix of that shape is built.
pub fn check_shape(rows: usize, cols: usize, max: usize) -> Result<()> {
    if rows == 0 || cols == 0 || rows > max || cols > max {
        return Err(MatrixError::DimensionLimit { rows, cols, max });
    }
    Ok(())
}
