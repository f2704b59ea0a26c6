//! Square matrices, their JSON form, and random generation

use crate::config::{DatasetConfig, MAX_SIZE};
use crate::error::{MatrixMillError, Result};
use crate::number::{format_cell, grid_ceil, parse_cell, round_to};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// A square matrix of decimals stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    values: Vec<f64>,
}

/// A cell as found on disk: numeric strings are canonical, bare numbers are accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Text(String),
    Number(f64),
}

impl RawCell {
    fn value(&self) -> Result<f64> {
        match self {
            Self::Text(s) => parse_cell(s),
            Self::Number(v) => Ok(*v),
        }
    }
}

impl Matrix {
    /// Build a matrix from rows; every row must have as many values as there are rows
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dim = rows.len();
        if dim == 0 {
            return Err(MatrixMillError::invalid_matrix("matrix has no rows"));
        }
        let mut values = Vec::with_capacity(dim * dim);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(MatrixMillError::invalid_matrix(format!(
                    "row {} has {} values, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            values.extend(row);
        }
        Ok(Self { dim, values })
    }

    /// An all-zero `dim`×`dim` matrix
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            values: vec![0.0; dim * dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.dim + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.dim + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.dim..(row + 1) * self.dim]
    }

    /// Sum of row `i`, accumulated left to right
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Sum of column `i`, accumulated top to bottom
    pub fn column_sum(&self, i: usize) -> f64 {
        (0..self.dim).map(|r| self.get(r, i)).sum()
    }

    /// Check the diagonal is zero and every value is finite
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.dim {
            let diagonal = self.get(i, i);
            if diagonal != 0.0 {
                return Err(MatrixMillError::invalid_matrix(format!(
                    "diagonal entry ({i}, {i}) is {diagonal}, expected 0"
                )));
            }
        }
        if let Some(pos) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(MatrixMillError::invalid_matrix(format!(
                "entry ({}, {}) is not finite",
                pos / self.dim,
                pos % self.dim
            )));
        }
        Ok(())
    }

    /// Check the matrix is `expected`×`expected`
    pub fn validate_dim(&self, expected: usize) -> Result<()> {
        if self.dim != expected {
            return Err(MatrixMillError::invalid_matrix(format!(
                "expected a {expected}x{expected} matrix, found {0}x{0}",
                self.dim
            )));
        }
        Ok(())
    }

    /// Numeric-string rows as written to disk
    pub fn to_cells(&self) -> Vec<Vec<String>> {
        (0..self.dim)
            .map(|r| {
                self.row(r)
                    .iter()
                    .enumerate()
                    .map(|(c, &v)| format_cell(v, r == c))
                    .collect()
            })
            .collect()
    }

    /// Parse rows of on-disk cells
    pub fn from_cells(rows: Vec<Vec<RawCell>>) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(RawCell::value).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    /// Read a matrix file
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MatrixMillError::at_path(path, e))?;
        let rows: Vec<Vec<RawCell>> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| MatrixMillError::at_path(path, e))?;
        Self::from_cells(rows).map_err(|e| MatrixMillError::at_path(path, e))
    }

    /// Write the matrix file, replacing any existing one
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| MatrixMillError::at_path(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &self.to_cells())
            .map_err(|e| MatrixMillError::at_path(path, e))?;
        writer.flush().map_err(|e| MatrixMillError::at_path(path, e))?;
        Ok(())
    }
}

fn check_size(n: usize) -> Result<()> {
    if n == 0 || n > MAX_SIZE {
        return Err(MatrixMillError::invalid_matrix(format!(
            "size {} is outside 1..={}",
            n, MAX_SIZE
        )));
    }
    Ok(())
}

/// Matrix generator trait
pub trait MatrixGenerator {
    /// Generate an `n`×`n` matrix with a zero diagonal
    fn generate(&mut self, n: usize) -> Result<Matrix>;

    /// Set the random seed
    fn set_seed(&mut self, seed: u64);
}

/// Uniform random values on a fixed decimal grid
///
/// Values are drawn as whole multiples of `10^-decimals` from `[value_min, value_max)`,
/// so every sample is already rounded and the upper bound is never reached.
pub struct RandomMatrixGenerator {
    rng: StdRng,
    steps: Uniform<i64>,
    decimals: u32,
}

impl RandomMatrixGenerator {
    /// Create a new random matrix generator
    pub fn new(seed: Option<u64>, value_min: f64, value_max: f64, decimals: u32) -> Result<Self> {
        let low = grid_ceil(value_min, decimals) as i64;
        let high = grid_ceil(value_max, decimals) as i64;
        if low >= high {
            return Err(MatrixMillError::invalid_config(format!(
                "no {decimals}-decimal values in [{value_min}, {value_max})"
            )));
        }
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            rng,
            steps: Uniform::new(low, high),
            decimals,
        })
    }

    /// Create a generator using the configured value range
    pub fn from_config(config: &DatasetConfig, seed: Option<u64>) -> Result<Self> {
        Self::new(seed, config.value_min, config.value_max, config.decimals)
    }
}

impl MatrixGenerator for RandomMatrixGenerator {
    fn generate(&mut self, n: usize) -> Result<Matrix> {
        check_size(n)?;
        let scale = 10f64.powi(self.decimals as i32);
        let mut matrix = Matrix::zeros(n);
        for r in 0..n {
            for c in 0..n {
                if r == c {
                    continue;
                }
                let step = self.steps.sample(&mut self.rng);
                matrix.set(r, c, round_to(step as f64 / scale, self.decimals));
            }
        }
        Ok(matrix)
    }

    fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Fills every off-diagonal cell with one value; useful for tests
pub struct DeterministicMatrixGenerator {
    value: f64,
}

impl DeterministicMatrixGenerator {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl MatrixGenerator for DeterministicMatrixGenerator {
    fn generate(&mut self, n: usize) -> Result<Matrix> {
        check_size(n)?;
        let mut matrix = Matrix::zeros(n);
        for r in 0..n {
            for c in 0..n {
                if r != c {
                    matrix.set(r, c, self.value);
                }
            }
        }
        Ok(matrix)
    }

    fn set_seed(&mut self, _seed: u64) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_matrix_shape_and_diagonal() {
        let mut gen = RandomMatrixGenerator::new(Some(42), -5.0, 15.0, 2).unwrap();
        let matrix = gen.generate(6).unwrap();
        assert_eq!(matrix.dim(), 6);
        assert!(matrix.validate().is_ok());
        for r in 0..6 {
            assert_eq!(matrix.get(r, r), 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_matrix() {
        let mut a = RandomMatrixGenerator::new(Some(9), -5.0, 15.0, 2).unwrap();
        let mut b = RandomMatrixGenerator::new(Some(9), -5.0, 15.0, 2).unwrap();
        assert_eq!(a.generate(8).unwrap(), b.generate(8).unwrap());
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        assert!(RandomMatrixGenerator::new(None, 0.001, 0.002, 2).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let result = Matrix::new(vec![vec![0.0, 1.0], vec![2.0]]);
        assert!(matches!(result, Err(MatrixMillError::InvalidMatrix(_))));
    }

    #[test]
    fn test_nonzero_diagonal_rejected() {
        let matrix = Matrix::new(vec![vec![1.0, 2.0], vec![3.0, 0.0]]).unwrap();
        assert!(matrix.validate().is_err());
    }

    #[test]
    fn test_sums() {
        let matrix = Matrix::new(vec![
            vec![0.0, 2.0, -1.0],
            vec![3.0, 0.0, 4.0],
            vec![1.0, -2.0, 0.0],
        ])
        .unwrap();
        assert_eq!(matrix.row_sum(1), 7.0);
        assert_eq!(matrix.column_sum(0), 4.0);
    }

    #[test]
    fn test_cells_mix_strings_and_numbers() {
        let rows: Vec<Vec<RawCell>> =
            serde_json::from_str(r#"[["0", 2.5], ["-1.25", 0]]"#).unwrap();
        let matrix = Matrix::from_cells(rows).unwrap();
        assert_eq!(matrix.get(0, 1), 2.5);
        assert_eq!(matrix.get(1, 0), -1.25);
    }

    #[test]
    fn test_to_cells_formatting() {
        let matrix = Matrix::new(vec![vec![0.0, 12.34], vec![-5.0, 0.0]]).unwrap();
        assert_eq!(
            matrix.to_cells(),
            vec![vec!["0", "12.34"], vec!["-5.0", "0"]]
        );
    }
}
