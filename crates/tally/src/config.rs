//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tally_analysis::OrderTotalCheck;
use tally_pricing::PricingConfig;

/// Default source table.
pub const DEFAULT_DATA_PATH: &str = "client_dataset.csv";

/// Every parameter of a report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Source table (default: `client_dataset.csv`)
    pub data_path: PathBuf,
    /// Tax and shipping rates
    pub pricing: PricingConfig,
    /// Categories listed by entry count (default: 3)
    pub top_categories: usize,
    /// Clients listed and summarised by entry count (default: 5)
    pub top_clients: usize,
    /// Rows shown from the derived table (default: 5)
    pub preview_rows: usize,
    /// Orders whose totals are confirmed
    pub validation: Vec<OrderTotalCheck>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            pricing: PricingConfig::default(),
            top_categories: 3,
            top_clients: 5,
            preview_rows: 5,
            validation: OrderTotalCheck::defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.data_path, PathBuf::from("client_dataset.csv"));
        assert_eq!(config.top_categories, 3);
        assert_eq!(config.top_clients, 5);
        assert_eq!(config.preview_rows, 5);
        assert_eq!(config.validation.len(), 3);
        assert_eq!(config.pricing, PricingConfig::default());
    }
}
