//! Matrix type and the operations defined over it.
//!
//! `Matrix` is a row-major buffer with an explicit shape. The operations are
//! free functions grouped by concern: cofactor-based routines (minor,
//! determinant, adjugate, inverse), index remapping transforms, and shape
//! checked arithmetic.
pub mod arithmetic;
pub mod cofactor;
pub mod matrix;
pub mod transform;

pub use arithmetic::{add, multiply};
pub use cofactor::{adjugate, determinant, inverse, minor};
pub use matrix::{is_square, same_shape, Matrix};
pub use transform::{rotate_right, transpose};
