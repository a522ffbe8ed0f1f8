//! Cofactor (Laplace) expansion: minors, determinant, adjugate and inverse.
//!
//! The determinant recurses along row 0 and costs O(n!); the adjugate
//! computes n² determinants of order n-1 on top of that. Both are intended
//! for the small matrices typed into an editor, not for numerical work on
//! large systems.
//!
//! Singularity is decided by comparing the determinant to `0.0` exactly. A
//! matrix whose determinant is only *close* to zero (for example after
//! accumulated round-off upstream) is inverted anyway and yields very large
//! entries. Callers that need a tolerance must apply their own before calling
//! [`inverse`].

use log::{debug, trace};

use crate::error::{MatrixError, Result};
use crate::math::matrix::Matrix;
use crate::math::transform::transpose;

/// Copy of `m` without row `row` and column `col`.
pub fn minor(m: &Matrix, row: usize, col: usize) -> Result<Matrix> {
    let (rows, cols) = m.shape();
    if row >= rows || col >= cols {
        return Err(MatrixError::IndexOutOfRange {
            row,
            col,
            rows,
            cols,
        });
    }

    let mut data = Vec::with_capacity((rows - 1) * cols.saturating_sub(1));
    for (i, values) in m.rows().enumerate() {
        if i == row {
            continue;
        }
        data.extend_from_slice(&values[..col]);
        data.extend_from_slice(&values[col + 1..]);
    }
    Matrix::from_shape_vec((rows - 1, cols - 1), data)
}

/// Determinant by cofactor expansion along the first row.
pub fn determinant(m: &Matrix) -> Result<f64> {
    require_square(m)?;
    expand(m)
}

fn expand(m: &Matrix) -> Result<f64> {
    let n = m.nrows();
    trace!("cofactor expansion of order {}", n);
    match n {
        1 => Ok(m[(0, 0)]),
        2 => Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]),
        _ => {
            let mut det = 0.0;
            for j in 0..n {
                let a = m[(0, j)];
                let sub = expand(&minor(m, 0, j)?)?;
                det += cofactor_sign(0, j) * a * sub;
            }
            Ok(det)
        }
    }
}

/// Transposed cofactor matrix. A 1x1 matrix has adjugate `[[1]]`.
pub fn adjugate(m: &Matrix) -> Result<Matrix> {
    require_square(m)?;
    let n = m.nrows();
    if n == 1 {
        return Matrix::identity(1);
    }

    let mut cofactors = Matrix::zeros(n, n)?;
    for i in 0..n {
        for j in 0..n {
            cofactors[(i, j)] = cofactor_sign(i, j) * expand(&minor(m, i, j)?)?;
        }
    }
    Ok(transpose(&cofactors))
}

/// Inverse as `adjugate(m) / determinant(m)`.
///
/// Fails with [`MatrixError::Singular`] when the determinant is exactly zero.
pub fn inverse(m: &Matrix) -> Result<Matrix> {
    require_square(m)?;
    let det = expand(m)?;
    if det == 0.0 {
        debug!("refusing to invert {}x{} matrix: determinant is 0", m.nrows(), m.ncols());
        return Err(MatrixError::Singular);
    }
    let adj = adjugate(m)?;
    Ok(adj.mapv(|v| v / det))
}

fn require_square(m: &Matrix) -> Result<()> {
    if !m.is_square() {
        let (rows, cols) = m.shape();
        debug!("rejecting non-square {}x{} matrix", rows, cols);
        return Err(MatrixError::NotSquare { rows, cols });
    }
    Ok(())
}

#[inline]
fn cofactor_sign(i: usize, j: usize) -> f64 {
    if (i + j) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}
