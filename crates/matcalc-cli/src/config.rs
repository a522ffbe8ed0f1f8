use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use matcalc_core::editing::{DEFAULT_MAX_DIMENSION, DEFAULT_RANDOM_RANGE};

/// Limits and presentation settings for the calculator front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Largest row or column count accepted for any input matrix.
    pub max_dimension: usize,
    /// Largest order accepted by determinant and inverse. Cofactor expansion
    /// is O(n!), so this is much smaller than `max_dimension`.
    pub max_expansion_order: usize,
    /// Decimal places shown in text output.
    pub precision: usize,
    pub random_min: i32,
    pub random_max: i32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            max_expansion_order: 10,
            precision: 4,
            random_min: DEFAULT_RANDOM_RANGE.0,
            random_max: DEFAULT_RANDOM_RANGE.1,
        }
    }
}

/// Load a calculator configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CalculatorConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: CalculatorConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Load the config at `path`, or fall back to defaults when none is given.
pub fn resolve_config(path: Option<&Path>) -> Result<CalculatorConfig> {
    match path {
        Some(p) => {
            log::info!("[matcalc] Using config: {:?}", p);
            load_config(p)
        }
        None => {
            let config = CalculatorConfig::default();
            log::debug!(
                "[matcalc] No config provided; using defaults:\n{}",
                serde_json::to_string_pretty(&config).unwrap_or_default()
            );
            Ok(config)
        }
    }
}
