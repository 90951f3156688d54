//! Error types for loading order data.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors raised while reading the source table.
///
/// Every variant is fatal: nothing downstream runs on a partial load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file could not be opened
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was opened
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Header is missing a required column
    #[error("Missing required column `{column}` in source header")]
    MissingColumn {
        /// Column name, exact casing
        column: String,
    },

    /// Row could not be parsed into an order line
    #[error("CSV error{}: {source}", line_suffix(.line))]
    Csv {
        /// 1-based line of the offending record, when known
        line: Option<u64>,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

impl From<csv::Error> for LoadError {
    fn from(source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line());
        Self::Csv { line, source }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}
