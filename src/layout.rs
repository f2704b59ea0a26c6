//! File naming for the size-indexed datasets

use crate::config::{DatasetConfig, SIZE_PLACEHOLDER};
use std::path::{Path, PathBuf};

/// Maps a matrix size to its matrix and differential file paths
#[derive(Debug, Clone)]
pub struct FileLayout {
    data_dir: PathBuf,
    matrix_pattern: String,
    differential_pattern: String,
}

impl FileLayout {
    /// Create a layout from the dataset configuration
    pub fn new(config: &DatasetConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            matrix_pattern: config.matrix_pattern.clone(),
            differential_pattern: config.differential_pattern.clone(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Filename of the matrix for size `n`
    pub fn matrix_filename(&self, n: usize) -> String {
        expand(&self.matrix_pattern, n)
    }

    /// Filename of the differential record for size `n`
    pub fn differential_filename(&self, n: usize) -> String {
        expand(&self.differential_pattern, n)
    }

    pub fn matrix_path(&self, n: usize) -> PathBuf {
        self.data_dir.join(self.matrix_filename(n))
    }

    pub fn differential_path(&self, n: usize) -> PathBuf {
        self.data_dir.join(self.differential_filename(n))
    }
}

fn expand(pattern: &str, n: usize) -> String {
    pattern.replace(SIZE_PLACEHOLDER, &n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filenames() {
        let layout = FileLayout::new(&DatasetConfig::new("/tmp/data"));
        assert_eq!(layout.matrix_filename(3), "glpk-n3.json");
        assert_eq!(layout.differential_filename(20), "patcas-n20.json");
        assert_eq!(
            layout.matrix_path(7),
            PathBuf::from("/tmp/data/glpk-n7.json")
        );
    }

    #[test]
    fn test_custom_pattern() {
        let config = DatasetConfig {
            matrix_pattern: "m_{n}x{n}.json".to_string(),
            ..DatasetConfig::new("out")
        };
        let layout = FileLayout::new(&config);
        assert_eq!(layout.matrix_filename(4), "m_4x4.json");
    }
}
