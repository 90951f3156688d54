//! Descriptive queries over the order table.
//!
//! All queries are read-only. Frequency rankings break ties by first
//! appearance in the table: groups are formed in first-seen order and the
//! descending count sort is stable.

use crate::error::{AnalysisError, Result};
use crate::key::{GroupKey, keys_from_column};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

const COUNT: &str = "count";

/// Number of rows holding a given value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCount {
    /// Column value.
    pub value: GroupKey,
    /// Rows with that value.
    pub count: u64,
}

impl fmt::Display for ValueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.value, self.count)
    }
}

/// Summary statistics of one numeric column.
///
/// Statistics are `None` when the column has no values; `std` also needs at
/// least two values. Quantiles interpolate linearly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    /// Column name.
    pub column: String,
    /// Non-null values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation (ddof = 1).
    pub std: Option<f64>,
    /// Minimum.
    pub min: Option<f64>,
    /// First quartile.
    pub q25: Option<f64>,
    /// Median.
    pub median: Option<f64>,
    /// Third quartile.
    pub q75: Option<f64>,
    /// Maximum.
    pub max: Option<f64>,
}

fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| AnalysisError::MissingColumn(name.to_string()))
}

/// Column names in table order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Summary statistics for every numeric column, in table order.
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnStats>> {
    df.get_columns()
        .iter()
        .filter(|column| column.dtype().is_primitive_numeric())
        .map(|column| column_stats(df, column.name().as_str()))
        .collect()
}

/// Summary statistics of one numeric column, nulls excluded.
pub fn column_stats(df: &DataFrame, column: &str) -> Result<ColumnStats> {
    let series = require_column(df, column)?;
    if !series.dtype().is_primitive_numeric() {
        return Err(AnalysisError::NonNumeric {
            column: column.to_string(),
            dtype: series.dtype().to_string(),
        });
    }

    let values = col(column).cast(DataType::Float64);
    let out = df
        .clone()
        .lazy()
        .select([
            values.clone().count().alias(COUNT),
            values.clone().mean().alias("mean"),
            values.clone().std(1).alias("std"),
            values.clone().min().alias("min"),
            values
                .clone()
                .quantile(lit(0.25), QuantileMethod::Linear)
                .alias("q25"),
            values
                .clone()
                .quantile(lit(0.5), QuantileMethod::Linear)
                .alias("median"),
            values
                .clone()
                .quantile(lit(0.75), QuantileMethod::Linear)
                .alias("q75"),
            values.max().alias("max"),
        ])
        .collect()?;

    let count = out.column(COUNT)?.cast(&DataType::UInt64)?;
    let count = count.u64()?.get(0).unwrap_or(0) as usize;

    Ok(ColumnStats {
        column: column.to_string(),
        count,
        mean: stat(&out, "mean")?,
        std: stat(&out, "std")?.filter(|_| count > 1),
        min: stat(&out, "min")?,
        q25: stat(&out, "q25")?,
        median: stat(&out, "median")?,
        q75: stat(&out, "q75")?,
        max: stat(&out, "max")?,
    })
}

fn stat(out: &DataFrame, name: &str) -> Result<Option<f64>> {
    let value = out.column(name)?.cast(&DataType::Float64)?;
    Ok(value.f64()?.get(0).filter(|v| !v.is_nan()))
}

/// The `n` most frequent values of `column`, most frequent first.
///
/// Nulls are not counted. Equal counts keep first-seen order.
pub fn top_values(df: &DataFrame, column: &str, n: usize) -> Result<Vec<ValueCount>> {
    require_column(df, column)?;

    let counts = df
        .clone()
        .lazy()
        .filter(col(column).is_not_null())
        .group_by_stable([col(column)])
        .agg([len().alias(COUNT)])
        .sort(
            [COUNT],
            SortMultipleOptions::default()
                .with_order_descending(true)
                .with_maintain_order(true),
        )
        .limit(IdxSize::try_from(n).unwrap_or(IdxSize::MAX))
        .collect()?;

    let keys = keys_from_column(counts.column(column)?)?;
    let totals = counts.column(COUNT)?.cast(&DataType::UInt64)?;
    let totals = totals.u64()?;

    Ok(keys
        .into_iter()
        .zip(totals.into_iter())
        .map(|(value, count)| ValueCount {
            value,
            count: count.unwrap_or(0),
        })
        .collect())
}

/// The `k` most frequent keys of `column`.
pub fn top_keys(df: &DataFrame, column: &str, k: usize) -> Result<Vec<GroupKey>> {
    Ok(top_values(df, column, k)?
        .into_iter()
        .map(|vc| vc.value)
        .collect())
}

/// Most frequent value of `target` among rows where `filter_column` equals
/// `filter_value`. `None` when no row matches.
pub fn most_frequent_where(
    df: &DataFrame,
    filter_column: &str,
    filter_value: &GroupKey,
    target: &str,
) -> Result<Option<GroupKey>> {
    require_column(df, filter_column)?;
    require_column(df, target)?;

    let filtered = df
        .clone()
        .lazy()
        .filter(filter_value.matches(filter_column))
        .collect()?;

    Ok(top_keys(&filtered, target, 1)?.into_iter().next())
}

/// Sum of numeric `sum_column` over rows where `filter_column` equals
/// `filter_value`. Zero when no row matches.
pub fn sum_where(
    df: &DataFrame,
    sum_column: &str,
    filter_column: &str,
    filter_value: &GroupKey,
) -> Result<f64> {
    let summed = require_column(df, sum_column)?;
    if !summed.dtype().is_primitive_numeric() {
        return Err(AnalysisError::NonNumeric {
            column: sum_column.to_string(),
            dtype: summed.dtype().to_string(),
        });
    }
    require_column(df, filter_column)?;

    let out = df
        .clone()
        .lazy()
        .filter(filter_value.matches(filter_column))
        .select([col(sum_column).cast(DataType::Float64).sum()])
        .collect()?;

    Ok(out.column(sum_column)?.f64()?.get(0).unwrap_or(0.0))
}
