#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod column;
pub mod columns;
pub mod config;
pub mod derive;
pub mod error;
pub mod line;
pub mod line_cost;
pub mod profit;
pub mod registry;
pub mod shipping;
pub mod subtotal;
pub mod total_price;

pub use column::DerivedColumn;
pub use config::PricingConfig;
pub use derive::{derivation_steps, derive_columns};
pub use error::{ColumnDerivationError, Result};
pub use line::LinePricing;
pub use registry::{DerivedColumnInfo, derived_columns, get_derived_column_info};
pub use shipping::tiered_shipping;
