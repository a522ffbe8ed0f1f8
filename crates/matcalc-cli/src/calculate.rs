//! Dispatch from a named operation to the kernel.
//!
//! Every call is independent: the operation, its operands and the limits are
//! passed in, and nothing is remembered between calls.
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use matcalc_core::editing::check_bounds;
use matcalc_core::{self as kernel, Matrix, MatrixError};

use crate::config::CalculatorConfig;

/// Serialized under the same short name used on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[serde(rename = "det")]
    Determinant,
    Inverse,
    Transpose,
    Rotate,
    Add,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Determinant,
        Operation::Inverse,
        Operation::Transpose,
        Operation::Rotate,
        Operation::Add,
        Operation::Multiply,
    ];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Determinant => "det",
            Operation::Inverse => "inverse",
            Operation::Transpose => "transpose",
            Operation::Rotate => "rotate",
            Operation::Add => "add",
            Operation::Multiply => "multiply",
        }
    }

    /// Heading printed above a result.
    pub fn label(self) -> &'static str {
        match self {
            Operation::Determinant => "Determinant",
            Operation::Inverse => "Inverse (A⁻¹)",
            Operation::Transpose => "Transpose (Aᵀ)",
            Operation::Rotate => "Rotated 90° right",
            Operation::Add => "A + B",
            Operation::Multiply => "A × B",
        }
    }

    pub fn needs_second_matrix(self) -> bool {
        matches!(self, Operation::Add | Operation::Multiply)
    }

    fn uses_expansion(self) -> bool {
        matches!(self, Operation::Determinant | Operation::Inverse)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "det" | "determinant" => Ok(Operation::Determinant),
            "inv" | "inverse" => Ok(Operation::Inverse),
            "transpose" => Ok(Operation::Transpose),
            "rotate" | "rotate-right" => Ok(Operation::Rotate),
            "add" => Ok(Operation::Add),
            "mul" | "multiply" => Ok(Operation::Multiply),
            _ => Err(format!("Unknown operation: {}", s)),
        }
    }
}

/// Result of a single operation: a scalar for the determinant, a matrix for
/// everything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Scalar(f64),
    Matrix(Matrix),
}

/// Run `op` on `a` (and `b` for binary operations) after applying the limits
/// in `config`.
pub fn evaluate(
    op: Operation,
    a: &Matrix,
    b: Option<&Matrix>,
    config: &CalculatorConfig,
) -> Result<Outcome> {
    check_bounds(a, config.max_dimension)?;
    if let Some(b) = b {
        check_bounds(b, config.max_dimension)?;
    }
    if op.uses_expansion() && a.is_square() && a.nrows() > config.max_expansion_order {
        bail!(
            "{} of a {}x{} matrix exceeds the cofactor expansion limit of {}",
            op.label(),
            a.nrows(),
            a.ncols(),
            config.max_expansion_order
        );
    }

    log::debug!("[matcalc] {} on {:?}", op, a.shape());
    let outcome = match op {
        Operation::Determinant => Outcome::Scalar(kernel::determinant(a)?),
        Operation::Inverse => Outcome::Matrix(kernel::inverse(a)?),
        Operation::Transpose => Outcome::Matrix(kernel::transpose(a)),
        Operation::Rotate => Outcome::Matrix(kernel::rotate_right(a)),
        Operation::Add => Outcome::Matrix(kernel::add(a, second(op, b)?)?),
        Operation::Multiply => Outcome::Matrix(kernel::multiply(a, second(op, b)?)?),
    };
    Ok(outcome)
}

fn second(op: Operation, b: Option<&Matrix>) -> Result<&Matrix> {
    match b {
        Some(b) => Ok(b),
        None => bail!("{} needs a second matrix", op.label()),
    }
}

/// Message shown to the user for a failed operation.
///
/// Kernel errors get a dedicated explanation; anything else falls back to the
/// full error chain.
pub fn user_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<MatrixError>() {
        Some(MatrixError::NotSquare { rows, cols }) => {
            format!("Matrix must be square (got {}x{})", rows, cols)
        }
        Some(MatrixError::Singular) => {
            "Matrix is singular (det = 0), it has no inverse".to_string()
        }
        Some(MatrixError::ShapeMismatch { op, lhs, rhs }) if *op == "multiply" => format!(
            "Number of columns of A ({}) must equal number of rows of B ({})",
            lhs.1, rhs.0
        ),
        Some(MatrixError::ShapeMismatch { lhs, rhs, .. }) => format!(
            "Matrices must have the same dimensions ({}x{} vs {}x{})",
            lhs.0, lhs.1, rhs.0, rhs.1
        ),
        Some(MatrixError::DimensionLimit { rows, cols, max }) => format!(
            "Matrix dimensions must be between 1 and {} (got {}x{})",
            max, rows, cols
        ),
        _ => format!("{:#}", err),
    }
}
