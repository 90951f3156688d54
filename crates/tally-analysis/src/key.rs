//! Group and filter keys.

use crate::error::{AnalysisError, Result};
use derive_more::{Display, From};
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A value of a grouping or filter column.
///
/// Identifier columns hold integers, label columns hold text. Keys order
/// integers before text, then by value.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Serialize, Deserialize,
)]
#[serde(untagged)]
pub enum GroupKey {
    /// Integer identifier, e.g. a client id
    #[display("{_0}")]
    Int(i64),
    /// Text label, e.g. a category
    #[display("{_0}")]
    Text(String),
}

impl GroupKey {
    /// Integer value, if this key is an identifier.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    /// Literal expression for comparing against a column.
    pub fn to_expr(&self) -> Expr {
        match self {
            Self::Int(v) => lit(*v),
            Self::Text(s) => lit(s.as_str()),
        }
    }

    /// Predicate selecting rows whose `column` equals this key.
    pub fn matches(&self, column: &str) -> Expr {
        col(column).eq(self.to_expr())
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Read every non-null value of a key column.
pub(crate) fn keys_from_column(column: &Column) -> Result<Vec<GroupKey>> {
    match column.dtype() {
        DataType::String => Ok(column
            .str()?
            .into_iter()
            .flatten()
            .map(GroupKey::from)
            .collect()),
        dtype if dtype.is_integer() => {
            let ints = column.cast(&DataType::Int64)?;
            Ok(ints.i64()?.into_iter().flatten().map(GroupKey::Int).collect())
        }
        other => Err(AnalysisError::UnsupportedKeyType {
            column: column.name().to_string(),
            dtype: other.to_string(),
        }),
    }
}
