//! Shipping Price
//!
//! Weight-tiered shipping charge. Lines strictly heavier than the threshold
//! pay the heavy per-pound rate; lines at or below it pay the light rate, so
//! the charge drops at the threshold (500 at 50 lb, about 350 just above).

use crate::column::DerivedColumn;
use crate::columns::SHIPPING_PRICE;
use crate::config::PricingConfig;
use polars::prelude::*;
use tally_data::columns::WEIGHT;

/// Shipping charge for a single line weight.
pub const fn tiered_shipping(weight: f64, config: &PricingConfig) -> f64 {
    if weight > config.shipping_weight_threshold {
        config.heavy_rate_per_lb * weight
    } else {
        config.light_rate_per_lb * weight
    }
}

/// Derives `shipping_price` from `Weight`
#[derive(Debug, Default, Clone, Copy)]
pub struct ShippingPriceColumn;

impl DerivedColumn for ShippingPriceColumn {
    fn name(&self) -> &'static str {
        SHIPPING_PRICE
    }

    fn description(&self) -> &'static str {
        "Weight-tiered shipping: heavy rate above the threshold, light rate at or below"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[WEIGHT]
    }

    fn expr(&self, config: &PricingConfig) -> Expr {
        let weight = col(WEIGHT).cast(DataType::Float64);
        when(weight.clone().gt(lit(config.shipping_weight_threshold)))
            .then(lit(config.heavy_rate_per_lb) * weight.clone())
            .otherwise(lit(config.light_rate_per_lb) * weight)
    }
}
