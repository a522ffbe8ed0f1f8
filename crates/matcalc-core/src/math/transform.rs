//! Index remapping transforms. Both are total: any valid matrix is accepted.

use crate::math::matrix::Matrix;

/// `cols x rows` matrix with `result[j][i] = m[i][j]`.
pub fn transpose(m: &Matrix) -> Matrix {
    let (rows, cols) = m.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in 0..rows {
            data.push(m[(i, j)]);
        }
    }
    rebuild((cols, rows), data)
}

/// Rotate 90° clockwise: `result[j][rows - 1 - i] = m[i][j]`.
///
/// Unlike [`transpose`], the first column of the input, read bottom-up,
/// becomes the first row of the output.
pub fn rotate_right(m: &Matrix) -> Matrix {
    let (rows, cols) = m.shape();
    let mut data = Vec::with_capacity(rows * cols);
    for j in 0..cols {
        for i in (0..rows).rev() {
            data.push(m[(i, j)]);
        }
    }
    rebuild((cols, rows), data)
}

// Shapes here are swaps of an already valid shape, so construction cannot fail.
fn rebuild(shape: (usize, usize), data: Vec<f64>) -> Matrix {
    match Matrix::from_shape_vec(shape, data) {
        Ok(m) => m,
        Err(e) => unreachable!("remapped shape {:?} rejected: {}", shape, e),
    }
}
