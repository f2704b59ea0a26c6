//! Configuration for the matrix datasets

use crate::error::{MatrixMillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Placeholder substituted with the matrix size in file patterns
pub const SIZE_PLACEHOLDER: &str = "{n}";

/// Largest matrix size either pass accepts
pub const MAX_SIZE: usize = 1000;

/// Largest number of decimals a value may be rounded to
pub const MAX_DECIMALS: u32 = 6;

/// Dataset configuration shared by the generate and convert passes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// Smallest matrix size (inclusive)
    pub min_size: usize,
    /// Largest matrix size (inclusive)
    pub max_size: usize,
    /// Lower bound for off-diagonal values (inclusive)
    pub value_min: f64,
    /// Upper bound for off-diagonal values (exclusive)
    pub value_max: f64,
    /// Decimal places kept after rounding
    pub decimals: u32,
    /// Directory holding both matrix and differential files
    pub data_dir: PathBuf,
    /// File name pattern for matrices, e.g. `glpk-n{n}.json`
    pub matrix_pattern: String,
    /// File name pattern for differential records, e.g. `patcas-n{n}.json`
    pub differential_pattern: String,
    /// Base seed; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            min_size: 3,
            max_size: 20,
            value_min: -5.0,
            value_max: 15.0,
            decimals: 2,
            data_dir: PathBuf::from("./data"),
            matrix_pattern: "glpk-n{n}.json".to_string(),
            differential_pattern: "patcas-n{n}.json".to_string(),
            seed: None,
        }
    }
}

impl DatasetConfig {
    /// Create the default configuration rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file; missing keys fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MatrixMillError::at_path(path, e))?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| MatrixMillError::at_path(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Restrict to a different size range
    pub fn with_sizes(mut self, min_size: usize, max_size: usize) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    /// All matrix sizes covered by this configuration
    pub fn sizes(&self) -> RangeInclusive<usize> {
        self.min_size..=self.max_size
    }

    /// Number of sizes (and thus files per pass)
    pub fn num_sizes(&self) -> usize {
        if self.min_size > self.max_size {
            0
        } else {
            self.max_size - self.min_size + 1
        }
    }

    /// Check the configuration for values the passes cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.min_size == 0 {
            return Err(MatrixMillError::invalid_config("min_size must be at least 1"));
        }
        if self.min_size > self.max_size {
            return Err(MatrixMillError::invalid_config(format!(
                "min_size {} exceeds max_size {}",
                self.min_size, self.max_size
            )));
        }
        if self.max_size > MAX_SIZE {
            return Err(MatrixMillError::invalid_config(format!(
                "max_size {} exceeds maximum of {}",
                self.max_size, MAX_SIZE
            )));
        }
        if !(self.value_min < self.value_max) {
            return Err(MatrixMillError::invalid_config(format!(
                "value range [{}, {}) is empty",
                self.value_min, self.value_max
            )));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(MatrixMillError::invalid_config(format!(
                "decimals {} exceeds maximum of {}",
                self.decimals, MAX_DECIMALS
            )));
        }
        for pattern in [&self.matrix_pattern, &self.differential_pattern] {
            if !pattern.contains(SIZE_PLACEHOLDER) {
                return Err(MatrixMillError::invalid_config(format!(
                    "file pattern '{}' lacks the {} placeholder",
                    pattern, SIZE_PLACEHOLDER
                )));
            }
        }
        if self.matrix_pattern == self.differential_pattern {
            return Err(MatrixMillError::invalid_config(
                "matrix and differential patterns must differ",
            ));
        }
        Ok(())
    }
}
