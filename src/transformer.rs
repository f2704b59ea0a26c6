//! Convert pass: matrix files into differential record files

use crate::config::DatasetConfig;
use crate::differential::DifferentialRecord;
use crate::error::{MatrixMillError, Result};
use crate::layout::FileLayout;
use crate::matrix::Matrix;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result of the convert pass
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub conversion_time: Duration,
}

impl ConversionResult {
    /// Print a summary of the conversion
    pub fn print_summary(&self) {
        println!("✅ Conversion Complete!");
        println!("  📁 Output: {}", self.output_dir.display());
        println!("  📊 Records: {}", self.files.len());
        println!("  ⏱️  Time: {:.3}s", self.conversion_time.as_secs_f64());
    }
}

/// Reads each matrix file and writes its differential record
pub struct DatasetTransformer {
    config: DatasetConfig,
    progress_bar: Option<ProgressBar>,
}

impl DatasetTransformer {
    pub fn new(config: DatasetConfig) -> Self {
        Self {
            config,
            progress_bar: None,
        }
    }

    /// Enable progress bar
    pub fn with_progress(mut self) -> Self {
        self.progress_bar = Some(ProgressBar::new(0));
        self
    }

    /// Convert every configured size in order; the first failure aborts the pass
    pub fn convert(&self) -> Result<ConversionResult> {
        self.config.validate()?;
        let layout = FileLayout::new(&self.config);

        if let Some(pb) = &self.progress_bar {
            pb.set_length(self.config.num_sizes() as u64);
            if let Ok(style) =
                ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
        }

        let start = Instant::now();
        let mut files = Vec::with_capacity(self.config.num_sizes());
        for n in self.config.sizes() {
            files.push(self.convert_size(&layout, n)?);
            if let Some(pb) = &self.progress_bar {
                pb.inc(1);
                pb.set_message(format!("Converted {}", layout.matrix_filename(n)));
            }
        }

        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("✅ Conversion complete");
        }

        Ok(ConversionResult {
            output_dir: layout.data_dir().to_path_buf(),
            files,
            conversion_time: start.elapsed(),
        })
    }

    /// Convert the matrix for size `n` and return the written path
    pub fn convert_size(&self, layout: &FileLayout, n: usize) -> Result<PathBuf> {
        let input = layout.matrix_path(n);
        let matrix = Matrix::read_from(&input)?;
        matrix
            .validate_dim(n)
            .and_then(|_| matrix.validate())
            .map_err(|e| MatrixMillError::at_path(&input, e))?;

        let record = DifferentialRecord::from_matrix(&matrix, self.config.decimals);
        let output = layout.differential_path(n);
        record.write_to(&output)?;

        tracing::debug!("{:?}", record.to_pairs());
        tracing::info!(
            "Wrote {} differentials from {} to {}",
            record.len(),
            input.display(),
            output.display()
        );
        Ok(output)
    }
}
