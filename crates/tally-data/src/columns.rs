//! Column names of the source order table.
//!
//! Names are an exact, case-sensitive contract with the input file.

/// Order identifier.
pub const ORDER_ID: &str = "order_id";
/// Client identifier.
pub const CLIENT_ID: &str = "client_id";
/// Item category.
pub const CATEGORY: &str = "category";
/// Item sub-category.
pub const SUB_CATEGORY: &str = "sub_category";
/// Price per unit charged to the client.
pub const UNIT_PRICE: &str = "unit_price";
/// Internal cost per unit.
pub const UNIT_COST: &str = "unit_cost";
/// Units ordered on the line.
pub const QTY: &str = "qty";
/// Line weight in pounds. Capitalised in the source file.
pub const WEIGHT: &str = "Weight";

/// Every column an order table must carry, in table order.
pub const REQUIRED: [&str; 8] = [
    ORDER_ID,
    CLIENT_ID,
    CATEGORY,
    SUB_CATEGORY,
    UNIT_PRICE,
    UNIT_COST,
    QTY,
    WEIGHT,
];
