//! Trait implemented by every derived column.

use crate::config::PricingConfig;
use polars::prelude::Expr;
use std::fmt::Debug;

/// A column computed row-wise from columns already present in the table.
pub trait DerivedColumn: Debug {
    /// Output column name.
    fn name(&self) -> &'static str;

    /// One-line description of the column.
    fn description(&self) -> &'static str;

    /// Columns the expression reads. All must be numeric and non-null.
    fn required_columns(&self) -> &'static [&'static str];

    /// Polars expression producing the column values, unaliased.
    fn expr(&self, config: &PricingConfig) -> Expr;
}
