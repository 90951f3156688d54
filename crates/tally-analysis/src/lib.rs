#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod explore;
pub mod key;
pub mod summary;
pub mod validation;

pub use error::{AnalysisError, Result};
pub use explore::{
    ColumnStats, ValueCount, column_names, column_stats, describe, most_frequent_where, sum_where,
    top_keys, top_values,
};
pub use key::GroupKey;
pub use summary::{
    ClientSummary, MILLION, ScaledClientSummary, round_half_even, scale_to_millions,
    sort_by_profit_desc, summarize_all_groups, summarize_groups,
};
pub use validation::{OrderTotalCheck, OrderTotalResult, validate_order_totals};
