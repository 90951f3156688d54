//! Typed order line record.

use serde::{Deserialize, Serialize};

/// One row of the source order table.
///
/// Field names follow the source header exactly; `weight` maps to the
/// capitalised `Weight` column. Records are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Order identifier. Several lines share one order.
    pub order_id: i64,

    /// Client identifier.
    pub client_id: i64,

    /// Item category.
    pub category: String,

    /// Item sub-category.
    pub sub_category: String,

    /// Price per unit charged to the client.
    pub unit_price: f64,

    /// Internal cost per unit.
    pub unit_cost: f64,

    /// Units ordered.
    pub qty: i64,

    /// Line weight in pounds.
    #[serde(rename = "Weight")]
    pub weight: f64,
}

impl OrderLine {
    /// Create a new order line.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_id: i64,
        client_id: i64,
        category: impl Into<String>,
        sub_category: impl Into<String>,
        unit_price: f64,
        unit_cost: f64,
        qty: i64,
        weight: f64,
    ) -> Self {
        Self {
            order_id,
            client_id,
            category: category.into(),
            sub_category: sub_category.into(),
            unit_price,
            unit_cost,
            qty,
            weight,
        }
    }
}
