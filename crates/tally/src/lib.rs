#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types from sub-crates
pub use tally_analysis as analysis;
pub use tally_data as data;
pub use tally_output as output;
pub use tally_pricing as pricing;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::{PipelineReport, ReportPipeline};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
