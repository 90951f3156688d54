//! Subtotal
//!
//! Pre-tax, pre-shipping price of the line.

use crate::column::DerivedColumn;
use crate::columns::SUBTOTAL;
use crate::config::PricingConfig;
use polars::prelude::*;
use tally_data::columns::{QTY, UNIT_PRICE};

/// Derives `subtotal = unit_price * qty`
#[derive(Debug, Default, Clone, Copy)]
pub struct SubtotalColumn;

impl DerivedColumn for SubtotalColumn {
    fn name(&self) -> &'static str {
        SUBTOTAL
    }

    fn description(&self) -> &'static str {
        "Unit price times quantity, before tax and shipping"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[UNIT_PRICE, QTY]
    }

    fn expr(&self, _config: &PricingConfig) -> Expr {
        col(UNIT_PRICE).cast(DataType::Float64) * col(QTY).cast(DataType::Float64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_metadata() {
        let column = SubtotalColumn;
        assert_eq!(column.name(), "subtotal");
        assert!(column.required_columns().contains(&"unit_price"));
        assert!(column.required_columns().contains(&"qty"));
    }
}
