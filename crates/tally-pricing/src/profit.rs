//! Profit

use crate::column::DerivedColumn;
use crate::columns::{LINE_COST, PROFIT, TOTAL_PRICE};
use crate::config::PricingConfig;
use polars::prelude::*;

/// Derives `profit = total_price - line_cost`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfitColumn;

impl DerivedColumn for ProfitColumn {
    fn name(&self) -> &'static str {
        PROFIT
    }

    fn description(&self) -> &'static str {
        "Total price minus line cost"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[TOTAL_PRICE, LINE_COST]
    }

    fn expr(&self, _config: &PricingConfig) -> Expr {
        col(TOTAL_PRICE) - col(LINE_COST)
    }
}
