//! MatrixMill - Sample dataset generation for settlement solvers
//!
//! This crate produces the small JSON datasets a debt-settlement solver is
//! exercised against: square debt matrices with a zero diagonal, and the
//! per-participant net balances derived from them.
//!
//! # Features
//!
//! - **Generate**: one random `n`×`n` matrix per size, values on a 2-decimal grid
//! - **Convert**: row sum minus column sum for each participant
//! - **Reproducible**: optional seed, derived per size
//! - **Configurable**: size range, value range, file patterns via JSON config
//!
//! # Example
//!
//! ```no_run
//! use matrixmill::{DatasetConfig, DatasetGenerator, DatasetTransformer};
//!
//! let config = DatasetConfig::new("./data");
//!
//! let mut generator = DatasetGenerator::new(config.clone()).with_seed(42);
//! generator.generate()?;
//!
//! DatasetTransformer::new(config).convert()?;
//! # Ok::<(), matrixmill::MatrixMillError>(())
//! ```

pub mod config;
pub mod differential;
pub mod error;
pub mod generator;
pub mod layout;
pub mod matrix;
pub mod number;
pub mod transformer;

pub use config::DatasetConfig;
pub use differential::{Differential, DifferentialRecord};
pub use error::{MatrixMillError, Result};
pub use generator::{DatasetGenerator, GenerationResult};
pub use layout::FileLayout;
pub use matrix::{DeterministicMatrixGenerator, Matrix, MatrixGenerator, RandomMatrixGenerator};
pub use transformer::{ConversionResult, DatasetTransformer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::DatasetConfig;
    pub use crate::error::Result;
    pub use crate::generator::DatasetGenerator;
    pub use crate::transformer::DatasetTransformer;
}
