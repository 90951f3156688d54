//! Integration tests for derived pricing columns.

use approx::assert_relative_eq;
use polars::prelude::*;
use tally_data::{OrderLine, order_lines_to_frame};
use tally_pricing::{LinePricing, PricingConfig, derive_columns};

fn sample_lines() -> Vec<OrderLine> {
    vec![
        OrderLine::new(100, 7, "food", "snacks", 10.0, 4.0, 5, 60.0),
        OrderLine::new(100, 7, "food", "drinks", 3.19, 1.27, 17, 50.0),
        OrderLine::new(101, 8, "toys", "dolls", 249.99, 120.4, 312, 50.01),
        OrderLine::new(102, 9, "tools", "saws", 0.05, 0.01, 1, 0.2),
    ]
}

fn f64_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

#[test]
fn test_columns_match_scalar_pricing_exactly() {
    let config = PricingConfig::default();
    let lines = sample_lines();
    let df = derive_columns(&order_lines_to_frame(&lines).unwrap(), &config).unwrap();

    let subtotal = f64_values(&df, "subtotal");
    let shipping = f64_values(&df, "shipping_price");
    let total = f64_values(&df, "total_price");
    let cost = f64_values(&df, "line_cost");
    let profit = f64_values(&df, "profit");

    for (i, line) in lines.iter().enumerate() {
        let expected = LinePricing::for_line(line, &config);
        assert_eq!(subtotal[i], expected.subtotal);
        assert_eq!(shipping[i], expected.shipping_price);
        assert_eq!(total[i], expected.total_price);
        assert_eq!(cost[i], expected.line_cost);
        assert_eq!(profit[i], expected.profit);
    }
}

#[test]
fn test_total_price_formula() {
    let config = PricingConfig::default();
    let lines = sample_lines();
    let df = derive_columns(&order_lines_to_frame(&lines).unwrap(), &config).unwrap();
    let shipping = f64_values(&df, "shipping_price");
    let total = f64_values(&df, "total_price");

    for (i, line) in lines.iter().enumerate() {
        let expected = (line.unit_price * line.qty as f64 + shipping[i]) * config.tax_multiplier();
        assert_eq!(total[i], expected);
    }
}

#[test]
fn test_profit_is_total_minus_cost() {
    let df = derive_columns(
        &order_lines_to_frame(&sample_lines()).unwrap(),
        &PricingConfig::default(),
    )
    .unwrap();
    let total = f64_values(&df, "total_price");
    let cost = f64_values(&df, "line_cost");
    let profit = f64_values(&df, "profit");

    for i in 0..profit.len() {
        assert_eq!(profit[i], total[i] - cost[i]);
    }
}

#[test]
fn test_shipping_threshold_discontinuity() {
    let df = derive_columns(
        &order_lines_to_frame(&sample_lines()).unwrap(),
        &PricingConfig::default(),
    )
    .unwrap();
    let shipping = f64_values(&df, "shipping_price");

    assert_eq!(shipping[1], 500.0);
    assert_eq!(shipping[2], 7.0 * 50.01);
}

#[test]
fn test_scenario_line() {
    let lines = vec![OrderLine::new(1, 1, "c", "s", 10.0, 4.0, 5, 60.0)];
    let df = derive_columns(
        &order_lines_to_frame(&lines).unwrap(),
        &PricingConfig::default(),
    )
    .unwrap();

    assert_eq!(f64_values(&df, "subtotal"), vec![50.0]);
    assert_eq!(f64_values(&df, "shipping_price"), vec![420.0]);
    assert_relative_eq!(f64_values(&df, "total_price")[0], 513.475, epsilon = 1e-9);
    assert_eq!(f64_values(&df, "line_cost"), vec![440.0]);
    assert_relative_eq!(f64_values(&df, "profit")[0], 73.475, epsilon = 1e-9);
}

#[test]
fn test_derivation_is_idempotent() {
    let config = PricingConfig::default();
    let once = derive_columns(&order_lines_to_frame(&sample_lines()).unwrap(), &config).unwrap();
    let twice = derive_columns(&once, &config).unwrap();

    assert_eq!(once.width(), twice.width());
    assert!(once.equals(&twice));
}

#[test]
fn test_source_frame_is_untouched() {
    let source = order_lines_to_frame(&sample_lines()).unwrap();
    let _ = derive_columns(&source, &PricingConfig::default()).unwrap();

    assert_eq!(source.width(), 8);
}
