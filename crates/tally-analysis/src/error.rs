//! Error types for analysis queries.

use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while querying an order table.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Queried column is absent
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Column cannot be used as a grouping or filter key
    #[error("Column `{column}` of type {dtype} cannot be used as a key")]
    UnsupportedKeyType {
        /// Column name
        column: String,
        /// Actual data type
        dtype: String,
    },

    /// Column must be numeric for the requested aggregate
    #[error("Column `{column}` of type {dtype} is not numeric")]
    NonNumeric {
        /// Column name
        column: String,
        /// Actual data type
        dtype: String,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
