//! Total Price
//!
//! Tax-inclusive price charged to the client. Tax applies to the subtotal and
//! the shipping charge together.

use crate::column::DerivedColumn;
use crate::columns::{SHIPPING_PRICE, SUBTOTAL, TOTAL_PRICE};
use crate::config::PricingConfig;
use polars::prelude::*;

/// Derives `total_price = (subtotal + shipping_price) * (1 + tax_rate)`
#[derive(Debug, Default, Clone, Copy)]
pub struct TotalPriceColumn;

impl DerivedColumn for TotalPriceColumn {
    fn name(&self) -> &'static str {
        TOTAL_PRICE
    }

    fn description(&self) -> &'static str {
        "Subtotal plus shipping, tax included"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[SUBTOTAL, SHIPPING_PRICE]
    }

    fn expr(&self, config: &PricingConfig) -> Expr {
        (col(SUBTOTAL) + col(SHIPPING_PRICE)) * lit(config.tax_multiplier())
    }
}
