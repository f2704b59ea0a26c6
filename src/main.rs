//! MatrixMill - Command-line interface for settlement dataset generation

use clap::{Args, Parser, Subcommand};
use matrixmill::{DatasetConfig, DatasetGenerator, DatasetTransformer, Result};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "matrixmill",
    about = "Generate debt matrices and their net-balance records",
    version = env!("CARGO_PKG_VERSION"),
    author = "MatrixMill Contributors"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    options: Options,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Write one random matrix file per size
    Generate,
    /// Derive differential records from existing matrix files
    Convert,
    /// Generate, then convert
    All,
}

#[derive(Args, Debug)]
struct Options {
    /// JSON configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Directory for matrix and differential files
    #[arg(short = 'd', long, global = true)]
    data_dir: Option<PathBuf>,

    /// Smallest matrix size
    #[arg(long, global = true)]
    min_size: Option<usize>,

    /// Largest matrix size
    #[arg(long, global = true)]
    max_size: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show progress bar
    #[arg(short = 'p', long, global = true)]
    progress: bool,

    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

impl Options {
    fn load_config(&self) -> Result<DatasetConfig> {
        let mut config = match &self.config {
            Some(path) => DatasetConfig::from_file(path)?,
            None => DatasetConfig::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(min) = self.min_size {
            config.min_size = min;
        }
        if let Some(max) = self.max_size {
            config.max_size = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy()
        .add_directive(format!("matrixmill={}", level).parse().unwrap_or_else(|_| level.into()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_generate(config: &DatasetConfig, progress: bool) -> Result<()> {
    let mut generator = DatasetGenerator::new(config.clone());
    if progress {
        generator = generator.with_progress();
    }
    let result = generator.generate()?;
    result.print_summary();
    Ok(())
}

fn run_convert(config: &DatasetConfig, progress: bool) -> Result<()> {
    let mut transformer = DatasetTransformer::new(config.clone());
    if progress {
        transformer = transformer.with_progress();
    }
    let result = transformer.convert()?;
    result.print_summary();
    println!("done");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.options.verbose);

    let config = cli.options.load_config()?;

    println!("🔧 Configuration:");
    println!("  Sizes: {}..={}", config.min_size, config.max_size);
    println!("  Values: [{}, {})", config.value_min, config.value_max);
    println!("  Data: {}", config.data_dir.display());
    if let Some(seed) = config.seed {
        println!("  Seed: {}", seed);
    }
    println!();

    let progress = cli.options.progress;
    match cli.command.unwrap_or(Command::All) {
        Command::Generate => run_generate(&config, progress),
        Command::Convert => run_convert(&config, progress),
        Command::All => {
            run_generate(&config, progress)?;
            run_convert(&config, progress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "matrixmill", "generate", "--max-size", "6", "--seed", "3", "-d", "/tmp/mm",
        ]);
        let config = cli.options.load_config().unwrap();
        assert_eq!(config.sizes(), 3..=6);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/mm"));
    }

    #[test]
    fn test_no_arguments_means_defaults() {
        let cli = Cli::parse_from(["matrixmill"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.options.load_config().unwrap(), DatasetConfig::default());
    }
}
