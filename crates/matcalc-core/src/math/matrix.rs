use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result, Shape};

/// Dense row-major matrix of `f64` with at least one row and one column.
///
/// Serializes as a nested array of rows. Deserialization goes through
/// [`Matrix::from_rows`], so ragged or empty input is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        let len = check_dims(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        Ok(m)
    }

    pub fn from_shape_vec(shape: Shape, data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = check_dims(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::BufferLength {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build from nested rows. The first row fixes the column count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let len = check_dims(nrows, ncols)?;

        let mut data = Vec::with_capacity(len);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::RaggedRow {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    /// Build a `rows x cols` matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let len = check_dims(rows, cols)?;
        let mut data = Vec::with_capacity(len);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> Shape {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Checked cell access.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows as slices, top to bottom.
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    pub fn mapv<F>(&self, f: F) -> Matrix
    where
        F: FnMut(&f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Every cell multiplied by `k`.
    pub fn scale(&self, k: f64) -> Matrix {
        self.mapv(|v| v * k)
    }
}

/// `true` when `m` has as many rows as columns.
pub fn is_square(m: &Matrix) -> bool {
    m.is_square()
}

/// `true` when `a` and `b` have identical `(rows, cols)`.
pub fn same_shape(a: &Matrix, b: &Matrix) -> bool {
    a.shape() == b.shape()
}

/// Cell count of a `rows x cols` matrix. Zero dimensions and shapes whose
/// buffer could not be allocated are rejected.
fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    let max_cells = isize::MAX as usize / std::mem::size_of::<f64>();
    match rows.checked_mul(cols) {
        Some(len) if len > 0 && len <= max_cells => Ok(len),
        _ => Err(MatrixError::InvalidShape { rows, cols }),
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let cells: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            write!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
