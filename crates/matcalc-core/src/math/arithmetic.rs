//! Shape-checked addition and multiplication.

use log::debug;

use crate::error::{MatrixError, Result};
use crate::math::matrix::{same_shape, Matrix};

/// Elementwise sum. Both operands must have the same shape.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if !same_shape(a, b) {
        return Err(mismatch("add", a, b));
    }
    let data = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x + y)
        .collect();
    Matrix::from_shape_vec(a.shape(), data)
}

/// Matrix product `a · b`. Requires `a.ncols() == b.nrows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        return Err(mismatch("multiply", a, b));
    }
    let (n, inner, p) = (a.nrows(), a.ncols(), b.ncols());
    let mut out = Matrix::zeros(n, p)?;
    for i in 0..n {
        for j in 0..p {
            let mut acc = 0.0;
            for k in 0..inner {
                acc += a[(i, k)] * b[(k, j)];
            }
            out[(i, j)] = acc;
        }
    }
    Ok(out)
}

fn mismatch(op: &'static str, a: &Matrix, b: &Matrix) -> MatrixError {
    debug!("{}: incompatible shapes {:?} and {:?}", op, a.shape(), b.shape());
    MatrixError::ShapeMismatch {
        op,
        lhs: a.shape(),
        rhs: b.shape(),
    }
}
