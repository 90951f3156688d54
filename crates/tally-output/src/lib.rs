#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod narrative;
pub mod report;
pub mod table;

pub use export::{ExportError, ExportFormat, Exporter};
pub use narrative::Narrative;
pub use report::{ReportFormat, Section, SectionBody, render_report};
pub use table::{
    Table, client_revenue_table, column_stats_table, frame_preview, scaled_summary_table,
    value_count_table,
};
