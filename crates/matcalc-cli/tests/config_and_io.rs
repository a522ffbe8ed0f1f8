//! Integration tests for the calculator config, matrix file I/O, dispatch
//! and rendering.

use std::io::Write;
use std::str::FromStr;

use matcalc_cli::calculate::{evaluate, user_message, Operation, Outcome};
use matcalc_cli::config::{load_config, resolve_config, CalculatorConfig};
use matcalc_cli::io::{read_matrix, write_matrix, MatrixFileFormat};
use matcalc_cli::render::{format_grid, format_number, render, OutputFormat};
use matcalc_core::Matrix;

fn m(rows: &[&[f64]]) -> Matrix {
    Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// CalculatorConfig
// ---------------------------------------------------------------------------

#[test]
fn config_default_values() {
    let cfg = CalculatorConfig::default();
    assert_eq!(cfg.max_dimension, 99);
    assert_eq!(cfg.random_min, -9);
    assert_eq!(cfg.random_max, 9);
    assert!(cfg.max_expansion_order > 0);
    assert!(cfg.max_expansion_order < cfg.max_dimension);
}

#[test]
fn config_partial_json_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "config.json", r#"{ "precision": 2 }"#);
    let cfg = load_config(&path).unwrap();
    assert_eq!(cfg.precision, 2);
    assert_eq!(cfg.max_dimension, CalculatorConfig::default().max_dimension);
}

#[test]
fn config_round_trips_through_json() {
    let cfg = CalculatorConfig::default();
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("max_expansion_order"));
    let back: CalculatorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn config_missing_file_errors() {
    assert!(load_config("/nonexistent/matcalc.json").is_err());
}

#[test]
fn resolve_config_without_path_uses_defaults() {
    assert_eq!(resolve_config(None).unwrap(), CalculatorConfig::default());
}

// ---------------------------------------------------------------------------
// Matrix files
// ---------------------------------------------------------------------------

#[test]
fn format_from_extension() {
    use std::path::Path;
    assert_eq!(
        MatrixFileFormat::from_path(Path::new("a.CSV")).unwrap(),
        MatrixFileFormat::Csv
    );
    assert_eq!(
        MatrixFileFormat::from_path(Path::new("a.tsv")).unwrap(),
        MatrixFileFormat::Tsv
    );
    assert!(MatrixFileFormat::from_path(Path::new("a.txt")).is_err());
}

#[test]
fn read_csv_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.csv", "1, 2, 3\n4.5, -5, 6\n");
    let a = read_matrix(&path).unwrap();
    assert_eq!(a, m(&[&[1.0, 2.0, 3.0], &[4.5, -5.0, 6.0]]));
}

#[test]
fn read_tsv_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.tsv", "1\t2\n3\t4\n");
    assert_eq!(read_matrix(&path).unwrap(), m(&[&[1.0, 2.0], &[3.0, 4.0]]));
}

#[test]
fn read_json_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.json", "[[1, 0], [0, 1]]");
    assert_eq!(read_matrix(&path).unwrap(), Matrix::identity(2).unwrap());
}

#[test]
fn read_rejects_non_numeric_cell() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.csv", "1,2\n3,x\n");
    let err = read_matrix(&path).unwrap_err();
    assert!(err.to_string().contains("row 2, column 2"));
}

#[test]
fn read_rejects_ragged_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.csv", "1,2\n3\n");
    assert!(read_matrix(&path).is_err());
}

#[test]
fn read_rejects_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "a.csv", "");
    assert!(read_matrix(&path).is_err());
}

#[test]
fn read_nonexistent_file_errors() {
    assert!(read_matrix("/nonexistent/path/a.csv").is_err());
}

#[test]
fn write_then_read_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let a = m(&[&[1.5, -2.0], &[0.25, 4.0]]);
    for name in ["out.csv", "out.tsv", "out.json"] {
        let path = dir.path().join(name);
        write_matrix(&path, &a).unwrap();
        assert_eq!(read_matrix(&path).unwrap(), a, "{}", name);
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn operation_from_str_accepts_aliases() {
    assert_eq!(Operation::from_str("det").unwrap(), Operation::Determinant);
    assert_eq!(Operation::from_str("Inverse").unwrap(), Operation::Inverse);
    assert_eq!(Operation::from_str("mul").unwrap(), Operation::Multiply);
    assert!(Operation::from_str("divide").is_err());
    for op in Operation::ALL {
        assert_eq!(Operation::from_str(op.name()).unwrap(), op);
    }
}

#[test]
fn operation_serde_uses_command_names() {
    for op in Operation::ALL {
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, format!("\"{}\"", op.name()));
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
    assert!(serde_json::from_str::<Operation>("\"divide\"").is_err());
}

#[test]
fn evaluate_determinant_and_product() {
    let cfg = CalculatorConfig::default();
    let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
    let b = m(&[&[5.0, 6.0], &[7.0, 8.0]]);
    assert_eq!(
        evaluate(Operation::Determinant, &a, None, &cfg).unwrap(),
        Outcome::Scalar(-2.0)
    );
    assert_eq!(
        evaluate(Operation::Multiply, &a, Some(&b), &cfg).unwrap(),
        Outcome::Matrix(m(&[&[19.0, 22.0], &[43.0, 50.0]]))
    );
}

#[test]
fn evaluate_binary_without_second_matrix_errors() {
    let cfg = CalculatorConfig::default();
    let a = Matrix::identity(2).unwrap();
    assert!(evaluate(Operation::Add, &a, None, &cfg).is_err());
}

#[test]
fn evaluate_enforces_dimension_limit() {
    let cfg = CalculatorConfig {
        max_dimension: 2,
        ..CalculatorConfig::default()
    };
    let a = Matrix::zeros(3, 1).unwrap();
    let err = evaluate(Operation::Transpose, &a, None, &cfg).unwrap_err();
    assert_eq!(
        user_message(&err),
        "Matrix dimensions must be between 1 and 2 (got 3x1)"
    );
}

#[test]
fn evaluate_enforces_expansion_limit() {
    let cfg = CalculatorConfig {
        max_expansion_order: 3,
        ..CalculatorConfig::default()
    };
    let a = Matrix::identity(4).unwrap();
    let err = evaluate(Operation::Determinant, &a, None, &cfg).unwrap_err();
    assert!(err.to_string().contains("expansion limit of 3"));
    // transforms are cheap and not limited
    assert!(evaluate(Operation::Transpose, &a, None, &cfg).is_ok());
}

#[test]
fn user_messages_for_kernel_errors() {
    let cfg = CalculatorConfig::default();
    let rect = Matrix::zeros(2, 3).unwrap();
    let sq = Matrix::zeros(2, 2).unwrap();
    let singular = m(&[&[1.0, 2.0], &[2.0, 4.0]]);

    let err = evaluate(Operation::Determinant, &rect, None, &cfg).unwrap_err();
    assert_eq!(user_message(&err), "Matrix must be square (got 2x3)");

    let err = evaluate(Operation::Inverse, &singular, None, &cfg).unwrap_err();
    assert_eq!(
        user_message(&err),
        "Matrix is singular (det = 0), it has no inverse"
    );

    let err = evaluate(Operation::Add, &sq, Some(&rect), &cfg).unwrap_err();
    assert_eq!(
        user_message(&err),
        "Matrices must have the same dimensions (2x2 vs 2x3)"
    );

    let err = evaluate(Operation::Multiply, &rect, Some(&sq), &cfg).unwrap_err();
    assert_eq!(
        user_message(&err),
        "Number of columns of A (3) must equal number of rows of B (2)"
    );
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[test]
fn format_number_trims_trailing_zeros() {
    assert_eq!(format_number(-2.0, 4), "-2");
    assert_eq!(format_number(1.5, 4), "1.5");
    assert_eq!(format_number(1.0 / 3.0, 4), "0.3333");
    assert_eq!(format_number(-0.00001, 4), "0");
    assert_eq!(format_number(120.0, 0), "120");
}

#[test]
fn format_grid_right_aligns() {
    let a = m(&[&[1.0, -10.0], &[100.0, 2.5]]);
    assert_eq!(format_grid(&a, 4), "  1  -10\n100  2.5");
}

#[test]
fn render_text_has_label() {
    let out = render(
        Operation::Determinant,
        &Outcome::Scalar(-2.0),
        OutputFormat::Text,
        4,
    );
    assert_eq!(out, "Determinant:\n-2");
}

#[test]
fn render_json_and_csv() {
    let outcome = Outcome::Matrix(m(&[&[1.0, 2.0], &[3.0, 4.0]]));
    let json = render(Operation::Transpose, &outcome, OutputFormat::Json, 4);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["operation"], "transpose");
    assert_eq!(value["result"][1][0], 3.0);

    let csv = render(Operation::Transpose, &outcome, OutputFormat::Csv, 4);
    assert_eq!(csv, "1,2\n3,4");
}

#[test]
fn output_format_from_str() {
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
    assert!(OutputFormat::from_str("xml").is_err());
}
