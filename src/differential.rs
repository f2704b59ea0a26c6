//! Per-row net balance: row sum minus the matching column sum

use crate::error::{MatrixMillError, Result};
use crate::matrix::Matrix;
use crate::number::{format_value, round_to};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// One `(index, value)` entry of a differential record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Differential {
    pub index: usize,
    pub value: f64,
}

/// Differential values for every row of a matrix, in row order
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentialRecord {
    entries: Vec<Differential>,
}

impl DifferentialRecord {
    /// Compute `row_sum(i) - column_sum(i)` for each row, rounded to `decimals`
    pub fn from_matrix(matrix: &Matrix, decimals: u32) -> Self {
        let entries = (0..matrix.dim())
            .map(|i| Differential {
                index: i,
                value: round_to(matrix.row_sum(i) - matrix.column_sum(i), decimals),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[Differential] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `[index, value]` string pairs as written to disk
    pub fn to_pairs(&self) -> Vec<[String; 2]> {
        self.entries
            .iter()
            .map(|d| [d.index.to_string(), format_value(d.value)])
            .collect()
    }

    /// Write the record file, replacing any existing one
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| MatrixMillError::at_path(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.to_pairs())
            .map_err(|e| MatrixMillError::at_path(path, e))?;
        writer.flush().map_err(|e| MatrixMillError::at_path(path, e))?;
        Ok(())
    }

    /// Read a record file back; indices must run 0..n in order
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MatrixMillError::at_path(path, e))?;
        let pairs: Vec<[String; 2]> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| MatrixMillError::at_path(path, e))?;

        let mut entries = Vec::with_capacity(pairs.len());
        for (expected, [index, value]) in pairs.iter().enumerate() {
            let index: usize = index.parse().map_err(|_| {
                MatrixMillError::Serialization(format!("index '{}' is not an integer", index))
            })?;
            if index != expected {
                return Err(MatrixMillError::Serialization(format!(
                    "entry {} has index {}",
                    expected, index
                )));
            }
            let value = value.parse().map_err(|_| {
                MatrixMillError::Serialization(format!("value '{}' is not a number", value))
            })?;
            entries.push(Differential { index, value });
        }
        Ok(Self { entries })
    }

    /// Sum of all differentials; zero up to rounding for any matrix
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|d| d.value).sum()
    }
}
