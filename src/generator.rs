//! Generate pass: one random matrix file per size

use crate::config::DatasetConfig;
use crate::error::Result;
use crate::layout::FileLayout;
use crate::matrix::{MatrixGenerator, RandomMatrixGenerator};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Result of the generate pass
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub generation_time: Duration,
}

impl GenerationResult {
    /// Print a summary of the generation
    pub fn print_summary(&self) {
        println!("✅ Generation Complete!");
        println!("  📁 Output: {}", self.output_dir.display());
        println!("  📊 Matrices: {}", self.files.len());
        println!("  ⏱️  Time: {:.3}s", self.generation_time.as_secs_f64());
    }
}

/// Writes a random zero-diagonal matrix for each configured size
pub struct DatasetGenerator {
    config: DatasetConfig,
    seed: Option<u64>,
    progress_bar: Option<ProgressBar>,
}

impl DatasetGenerator {
    /// Create a new dataset generator
    pub fn new(config: DatasetConfig) -> Self {
        let seed = config.seed;
        Self {
            config,
            seed,
            progress_bar: None,
        }
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable progress bar
    pub fn with_progress(mut self) -> Self {
        self.progress_bar = Some(ProgressBar::new(0));
        self
    }

    /// Generate every matrix file; the first failure aborts the pass
    pub fn generate(&mut self) -> Result<GenerationResult> {
        self.config.validate()?;
        let layout = FileLayout::new(&self.config);
        fs::create_dir_all(layout.data_dir())?;

        tracing::info!(
            "Generating {} matrices into {}",
            self.config.num_sizes(),
            layout.data_dir().display()
        );

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
            let path = self.generate_size(&layout, n)?;
            if let Some(pb) = &self.progress_bar {
                pb.inc(1);
                pb.set_message(format!("Generated {}", layout.matrix_filename(n)));
            }
            files.push(path);
        }

        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("✅ Matrix generation complete");
        }

        Ok(GenerationResult {
            output_dir: layout.data_dir().to_path_buf(),
            files,
            generation_time: start.elapsed(),
        })
    }

    /// Generate and write the matrix for size `n`
    fn generate_size(&self, layout: &FileLayout, n: usize) -> Result<PathBuf> {
        // Derive a per-size seed so each file is reproducible on its own
        let seed = self.seed.map(|s| s.wrapping_add(n as u64));
        let mut generator = RandomMatrixGenerator::from_config(&self.config, seed)?;
        let matrix = generator.generate(n)?;

        let path = layout.matrix_path(n);
        matrix.write_to(&path)?;

        tracing::debug!("{:?}", matrix.to_cells());
        tracing::info!("Wrote {}x{} matrix to {}", n, n, path.display());
        Ok(path)
    }
}
