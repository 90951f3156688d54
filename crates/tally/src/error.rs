//! Error types for the report pipeline.

use tally_analysis::AnalysisError;
use tally_data::LoadError;
use tally_pricing::ColumnDerivationError;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Fatal pipeline errors. Each one ends the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source table could not be loaded
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Derived columns could not be computed
    #[error("Column derivation error: {0}")]
    Derivation(#[from] ColumnDerivationError),

    /// Exploration or aggregation query failed
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}
