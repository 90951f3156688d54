//! Adding derived columns to an order table.

use crate::column::DerivedColumn;
use crate::config::PricingConfig;
use crate::error::{ColumnDerivationError, Result};
use crate::line_cost::LineCostColumn;
use crate::profit::ProfitColumn;
use crate::shipping::ShippingPriceColumn;
use crate::subtotal::SubtotalColumn;
use crate::total_price::TotalPriceColumn;
use polars::prelude::*;
use tracing::{debug, info};

/// Derivation steps in dependency order.
pub fn derivation_steps() -> Vec<Box<dyn DerivedColumn>> {
    vec![
        Box::new(SubtotalColumn),
        Box::new(ShippingPriceColumn),
        Box::new(TotalPriceColumn),
        Box::new(LineCostColumn),
        Box::new(ProfitColumn),
    ]
}

/// Add every derived column to a copy of `orders`.
///
/// Each step checks its inputs before running, so a missing, non-numeric or
/// null input fails with [`ColumnDerivationError`] and no table is returned.
/// Running this on an already derived table recomputes the same values.
pub fn derive_columns(orders: &DataFrame, config: &PricingConfig) -> Result<DataFrame> {
    let mut df = orders.clone();

    for step in derivation_steps() {
        check_inputs(&df, step.as_ref())?;
        df = df
            .lazy()
            .with_column(step.expr(config).alias(step.name()))
            .collect()?;
        debug!(column = step.name(), "derived column");
    }

    info!(rows = df.height(), "derived pricing columns");

    Ok(df)
}

fn check_inputs(df: &DataFrame, step: &dyn DerivedColumn) -> Result<()> {
    for &name in step.required_columns() {
        let column = df
            .column(name)
            .map_err(|_| ColumnDerivationError::MissingColumn {
                derived: step.name().to_string(),
                column: name.to_string(),
            })?;

        if !column.dtype().is_primitive_numeric() {
            return Err(ColumnDerivationError::NonNumeric {
                derived: step.name().to_string(),
                column: name.to_string(),
                dtype: column.dtype().to_string(),
            });
        }

        let nulls = column.null_count();
        if nulls > 0 {
            return Err(ColumnDerivationError::MissingValues {
                derived: step.name().to_string(),
                column: name.to_string(),
                count: nulls,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        df! {
            "unit_price" => [10.0, 2.0],
            "unit_cost" => [4.0, 1.5],
            "qty" => [5i64, 3],
            "Weight" => [60.0, 50.0],
        }
        .unwrap()
    }

    #[test]
    fn test_adds_columns_in_order() {
        let df = derive_columns(&frame(), &PricingConfig::default()).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "unit_price",
                "unit_cost",
                "qty",
                "Weight",
                "subtotal",
                "shipping_price",
                "total_price",
                "line_cost",
                "profit"
            ]
        );
    }

    #[test]
    fn test_boundary_weight_uses_light_rate() {
        let df = derive_columns(&frame(), &PricingConfig::default()).unwrap();
        let shipping = df.column("shipping_price").unwrap().f64().unwrap();

        assert_eq!(shipping.get(0), Some(420.0));
        assert_eq!(shipping.get(1), Some(500.0));
    }

    #[test]
    fn test_missing_column() {
        let df = frame().drop("Weight").unwrap();
        let err = derive_columns(&df, &PricingConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            ColumnDerivationError::MissingColumn { ref derived, ref column }
                if derived == "shipping_price" && column == "Weight"
        ));
    }

    #[test]
    fn test_non_numeric_column() {
        let df = df! {
            "unit_price" => ["10.0"],
            "unit_cost" => [4.0],
            "qty" => [5i64],
            "Weight" => [60.0],
        }
        .unwrap();
        let err = derive_columns(&df, &PricingConfig::default()).unwrap_err();

        assert!(matches!(err, ColumnDerivationError::NonNumeric { ref column, .. } if column == "unit_price"));
    }

    #[test]
    fn test_small_integer_inputs() {
        let df = df! {
            "unit_price" => [10.0, 2.0],
            "unit_cost" => [4.0, 1.5],
            "qty" => [5i16, 3],
            "Weight" => [60u8, 50],
        }
        .unwrap();
        let derived = derive_columns(&df, &PricingConfig::default()).unwrap();
        let expected = derive_columns(&frame(), &PricingConfig::default()).unwrap();

        for name in ["subtotal", "shipping_price", "total_price", "line_cost", "profit"] {
            assert_eq!(
                derived.column(name).unwrap().f64().unwrap().to_vec(),
                expected.column(name).unwrap().f64().unwrap().to_vec()
            );
        }
    }

    #[test]
    fn test_null_input() {
        let df = df! {
            "unit_price" => [Some(10.0), Some(1.0)],
            "unit_cost" => [Some(4.0), None],
            "qty" => [5i64, 1],
            "Weight" => [60.0, 1.0],
        }
        .unwrap();
        let err = derive_columns(&df, &PricingConfig::default()).unwrap_err();

        assert!(matches!(
            err,
            ColumnDerivationError::MissingValues { ref derived, count: 1, .. } if derived == "line_cost"
        ));
    }
}
