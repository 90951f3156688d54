//! Names of the derived columns.

/// Pre-tax, pre-shipping line price.
pub const SUBTOTAL: &str = "subtotal";
/// Weight-tiered shipping charge.
pub const SHIPPING_PRICE: &str = "shipping_price";
/// Tax-inclusive price of subtotal plus shipping.
pub const TOTAL_PRICE: &str = "total_price";
/// Internal cost of fulfilling the line.
pub const LINE_COST: &str = "line_cost";
/// Total price minus line cost.
pub const PROFIT: &str = "profit";

/// Derived columns in dependency order.
pub const DERIVED: [&str; 5] = [SUBTOTAL, SHIPPING_PRICE, TOTAL_PRICE, LINE_COST, PROFIT];
