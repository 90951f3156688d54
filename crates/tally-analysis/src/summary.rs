//! Per-client rollups, unit scaling and profit ranking.

use crate::error::{AnalysisError, Result};
use crate::key::{GroupKey, keys_from_column};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tally_data::columns::QTY;
use tally_pricing::columns::{PROFIT, SHIPPING_PRICE, TOTAL_PRICE};
use tracing::debug;

/// Divisor converting units and dollars to millions.
pub const MILLION: f64 = 1_000_000.0;

const TOTAL_UNITS: &str = "total_units";
const TOTAL_SHIPPING_PRICE: &str = "total_shipping_price";
const TOTAL_REVENUE: &str = "total_revenue";
const TOTAL_PROFIT: &str = "total_profit";

/// Totals across every line of one client (or other group).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    /// Group key, normally the client id.
    pub key: GroupKey,
    /// Sum of `qty`.
    pub total_units: i64,
    /// Sum of `shipping_price`.
    pub total_shipping_price: f64,
    /// Sum of `total_price`.
    pub total_revenue: f64,
    /// Sum of `profit`.
    pub total_profit: f64,
}

impl ClientSummary {
    /// Scale every total to millions, rounded to 2 decimals.
    pub fn to_millions(&self) -> ScaledClientSummary {
        ScaledClientSummary {
            key: self.key.clone(),
            total_units: round_half_even(self.total_units as f64 / MILLION, 2),
            total_shipping_price: round_half_even(self.total_shipping_price / MILLION, 2),
            total_revenue: round_half_even(self.total_revenue / MILLION, 2),
            total_profit: round_half_even(self.total_profit / MILLION, 2),
        }
    }
}

impl fmt::Display for ClientSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} units, shipping ${:.2}, revenue ${:.2}, profit ${:.2}",
            self.key,
            self.total_units,
            self.total_shipping_price,
            self.total_revenue,
            self.total_profit
        )
    }
}

/// A [`ClientSummary`] in millions, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledClientSummary {
    /// Group key, normally the client id.
    pub key: GroupKey,
    /// Units, millions.
    pub total_units: f64,
    /// Shipping, millions of dollars.
    pub total_shipping_price: f64,
    /// Revenue, millions of dollars.
    pub total_revenue: f64,
    /// Profit, millions of dollars.
    pub total_profit: f64,
}

/// Round to `decimals` places, ties to even.
///
/// Ties are resolved on the scaled binary value, so only values that are
/// exact midpoints in binary (such as 0.125) round to even.
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Scale summaries to millions, keeping their order.
pub fn scale_to_millions(summaries: &[ClientSummary]) -> Vec<ScaledClientSummary> {
    summaries.iter().map(ClientSummary::to_millions).collect()
}

/// Sort by total profit, highest first. Equal profits keep their order.
pub fn sort_by_profit_desc(summaries: &mut [ScaledClientSummary]) {
    summaries.sort_by(|a, b| b.total_profit.total_cmp(&a.total_profit));
}

/// Summarize the lines of each key in `keys`, returned in the order of
/// `keys`. Keys with no lines are left out; a repeated key is reported once.
pub fn summarize_groups(
    df: &DataFrame,
    key_column: &str,
    keys: &[GroupKey],
) -> Result<Vec<ClientSummary>> {
    check_columns(df, key_column)?;
    if keys.is_empty() {
        return Ok(Vec::new());
    }

    let mut rows: HashMap<GroupKey, ClientSummary> =
        aggregate(df.clone().lazy(), key_column)?
            .into_iter()
            .map(|row| (row.key.clone(), row))
            .collect();

    Ok(keys.iter().filter_map(|k| rows.remove(k)).collect())
}

/// Summarize every group of `key_column`, in first-seen order.
pub fn summarize_all_groups(df: &DataFrame, key_column: &str) -> Result<Vec<ClientSummary>> {
    check_columns(df, key_column)?;
    aggregate(df.clone().lazy(), key_column)
}

fn check_columns(df: &DataFrame, key_column: &str) -> Result<()> {
    for name in [key_column, QTY, SHIPPING_PRICE, TOTAL_PRICE, PROFIT] {
        if df.column(name).is_err() {
            return Err(AnalysisError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

fn aggregate(lf: LazyFrame, key_column: &str) -> Result<Vec<ClientSummary>> {
    let out = lf
        .filter(col(key_column).is_not_null())
        .group_by_stable([col(key_column)])
        .agg([
            col(QTY).cast(DataType::Int64).sum().alias(TOTAL_UNITS),
            col(SHIPPING_PRICE).sum().alias(TOTAL_SHIPPING_PRICE),
            col(TOTAL_PRICE).sum().alias(TOTAL_REVENUE),
            col(PROFIT).sum().alias(TOTAL_PROFIT),
        ])
        .collect()?;

    let keys = keys_from_column(out.column(key_column)?)?;
    let units = out.column(TOTAL_UNITS)?.i64()?;
    let shipping = out.column(TOTAL_SHIPPING_PRICE)?.f64()?;
    let revenue = out.column(TOTAL_REVENUE)?.f64()?;
    let profit = out.column(TOTAL_PROFIT)?.f64()?;

    let summaries: Vec<ClientSummary> = keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| ClientSummary {
            key,
            total_units: units.get(i).unwrap_or(0),
            total_shipping_price: shipping.get(i).unwrap_or(0.0),
            total_revenue: revenue.get(i).unwrap_or(0.0),
            total_profit: profit.get(i).unwrap_or(0.0),
        })
        .collect();

    debug!(groups = summaries.len(), key = key_column, "aggregated groups");

    Ok(summaries)
}
