//! Error types for column derivation.

use thiserror::Error;

/// Result type for derivation operations.
pub type Result<T> = std::result::Result<T, ColumnDerivationError>;

/// Errors raised while adding derived columns.
///
/// Every variant aborts the pipeline; no partially derived table is returned.
#[derive(Debug, Error)]
pub enum ColumnDerivationError {
    /// Required input column is absent
    #[error("Cannot derive `{derived}`: missing input column `{column}`")]
    MissingColumn {
        /// Column being derived
        derived: String,
        /// Missing input
        column: String,
    },

    /// Required input column is not numeric
    #[error("Cannot derive `{derived}`: input column `{column}` has non-numeric type {dtype}")]
    NonNumeric {
        /// Column being derived
        derived: String,
        /// Offending input
        column: String,
        /// Actual data type
        dtype: String,
    },

    /// Required input column has null values
    #[error("Cannot derive `{derived}`: input column `{column}` has {count} missing values")]
    MissingValues {
        /// Column being derived
        derived: String,
        /// Offending input
        column: String,
        /// Number of nulls
        count: usize,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
