//! matcalc-core: exact, dimension-checked matrix arithmetic.
//!
//! The kernel works on small dense `f64` matrices and offers determinant,
//! adjugate and inverse by cofactor (Laplace) expansion, transpose, 90°
//! rotation, addition and multiplication. Every operation borrows its inputs
//! and returns a newly allocated result, so callers never observe a partially
//! updated matrix.
//!
//! Cofactor expansion costs O(n!) and is only meant for the small matrices an
//! interactive editor produces. Callers should reject large inputs before
//! asking for a determinant or an inverse.
pub mod editing;
pub mod error;
pub mod math;

pub use error::{MatrixError, Result, Shape};
pub use math::{
    add, adjugate, determinant, inverse, is_square, minor, multiply, rotate_right, same_shape,
    transpose, Matrix,
};
