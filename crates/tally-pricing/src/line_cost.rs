//! Line Cost
//!
//! Internal cost of fulfilling a line: the goods at unit cost plus shipping.

use crate::column::DerivedColumn;
use crate::columns::{LINE_COST, SHIPPING_PRICE};
use crate::config::PricingConfig;
use polars::prelude::*;
use tally_data::columns::{QTY, UNIT_COST};

/// Derives `line_cost = unit_cost * qty + shipping_price`
#[derive(Debug, Default, Clone, Copy)]
pub struct LineCostColumn;

impl DerivedColumn for LineCostColumn {
    fn name(&self) -> &'static str {
        LINE_COST
    }

    fn description(&self) -> &'static str {
        "Unit cost times quantity plus shipping"
    }

    fn required_columns(&self) -> &'static [&'static str] {
        &[UNIT_COST, QTY, SHIPPING_PRICE]
    }

    fn expr(&self, _config: &PricingConfig) -> Expr {
        col(UNIT_COST).cast(DataType::Float64) * col(QTY).cast(DataType::Float64)
            + col(SHIPPING_PRICE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_metadata() {
        let column = LineCostColumn;
        assert_eq!(column.name(), "line_cost");
        assert_eq!(column.required_columns().len(), 3);
    }
}
