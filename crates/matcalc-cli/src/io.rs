//! Reading and writing matrix files.
//!
//! `.csv` and `.tsv` files hold one matrix row per line with no header.
//! `.json` files hold a nested array of rows.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use matcalc_core::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFileFormat {
    Csv,
    Tsv,
    Json,
}

impl MatrixFileFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("tsv") => Ok(Self::Tsv),
            Some("json") => Ok(Self::Json),
            _ => bail!(
                "Matrix file must have a .csv, .tsv or .json extension: {}",
                path.display()
            ),
        }
    }

    fn delimiter(self) -> u8 {
        match self {
            Self::Tsv => b'\t',
            _ => b',',
        }
    }
}

/// Read a matrix from `path`, choosing the parser from the extension.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let format = MatrixFileFormat::from_path(path)?;
    if !path.exists() {
        bail!("File does not exist: {}", path.display());
    }

    let matrix = match format {
        MatrixFileFormat::Json => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read matrix: {}", path.display()))?;
            serde_json::from_str::<Matrix>(&content)
                .with_context(|| format!("Failed to parse matrix: {}", path.display()))?
        }
        MatrixFileFormat::Csv | MatrixFileFormat::Tsv => read_delimited(path, format.delimiter())?,
    };
    log::debug!(
        "[matcalc] Read {}x{} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(matrix)
}

fn read_delimited(path: &Path, delimiter: u8) -> Result<Matrix> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open matrix file: {}", path.display()))?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", row_idx + 1))?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col_idx, field)| {
                field.parse::<f64>().map_err(|_| {
                    anyhow!(
                        "Invalid number '{}' at row {}, column {}",
                        field,
                        row_idx + 1,
                        col_idx + 1
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    Matrix::from_rows(rows).with_context(|| format!("Invalid matrix in {}", path.display()))
}

/// Write `matrix` to `path` in the format implied by its extension.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &Matrix) -> Result<()> {
    let path = path.as_ref();
    match MatrixFileFormat::from_path(path)? {
        MatrixFileFormat::Json => {
            let json = serde_json::to_string_pretty(matrix)?;
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
        }
        format => {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(format.delimiter())
                .has_headers(false)
                .from_path(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            for row in matrix.rows() {
                writer.write_record(row.iter().map(|v| v.to_string()))?;
            }
            writer.flush()?;
        }
    }
    log::info!(
        "[matcalc] Wrote {}x{} matrix to {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(())
}
