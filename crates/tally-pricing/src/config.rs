//! Pricing configuration.

use serde::{Deserialize, Serialize};

/// Rates and thresholds used to derive pricing columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Sales tax applied to subtotal plus shipping (default: 0.0925)
    pub tax_rate: f64,
    /// Weight in pounds above which the heavy rate applies (default: 50.0)
    pub shipping_weight_threshold: f64,
    /// Shipping charge per pound above the threshold (default: 7.0)
    pub heavy_rate_per_lb: f64,
    /// Shipping charge per pound at or below the threshold (default: 10.0)
    pub light_rate_per_lb: f64,
}

impl PricingConfig {
    /// Factor applied to a pre-tax amount to include tax.
    pub const fn tax_multiplier(&self) -> f64 {
        1.0 + self.tax_rate
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.0925,
            shipping_weight_threshold: 50.0,
            heavy_rate_per_lb: 7.0,
            light_rate_per_lb: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.tax_rate, 0.0925);
        assert_eq!(config.shipping_weight_threshold, 50.0);
        assert_eq!(config.heavy_rate_per_lb, 7.0);
        assert_eq!(config.light_rate_per_lb, 10.0);
    }

    #[test]
    fn test_tax_multiplier() {
        let config = PricingConfig::default();
        assert!((config.tax_multiplier() - 1.0925).abs() < 1e-12);
    }
}
