//! Scalar pricing for a single order line.
//!
//! Mirrors the column expressions operation for operation, so a value
//! computed here is bit-identical to the one in the derived table.

use crate::config::PricingConfig;
use crate::shipping::tiered_shipping;
use serde::{Deserialize, Serialize};
use tally_data::OrderLine;

/// Derived pricing values of one order line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePricing {
    /// `unit_price * qty`
    pub subtotal: f64,
    /// Weight-tiered shipping charge
    pub shipping_price: f64,
    /// `(subtotal + shipping_price) * (1 + tax_rate)`
    pub total_price: f64,
    /// `unit_cost * qty + shipping_price`
    pub line_cost: f64,
    /// `total_price - line_cost`
    pub profit: f64,
}

impl LinePricing {
    /// Price a line from its base inputs.
    pub fn for_line(line: &OrderLine, config: &PricingConfig) -> Self {
        Self::from_inputs(
            line.unit_price,
            line.unit_cost,
            line.qty as f64,
            line.weight,
            config,
        )
    }

    /// Price a line from raw values.
    pub const fn from_inputs(
        unit_price: f64,
        unit_cost: f64,
        qty: f64,
        weight: f64,
        config: &PricingConfig,
    ) -> Self {
        let subtotal = unit_price * qty;
        let shipping_price = tiered_shipping(weight, config);
        let total_price = (subtotal + shipping_price) * config.tax_multiplier();
        let line_cost = unit_cost * qty + shipping_price;
        let profit = total_price - line_cost;

        Self {
            subtotal,
            shipping_price,
            total_price,
            line_cost,
            profit,
        }
    }
}
