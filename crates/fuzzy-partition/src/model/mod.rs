//! Fuzzy partitioning model and its presentation.
//!
//! - [`FuzzyPartitioningModel`]: per-feature cut points with derived statistics
//! - [`FeatureCount`]: feature/count pair returned by extremum queries
//! - [`ReportConfig`]: formatting options for the textual report

mod partitioning;
mod report;

pub use partitioning::{FeatureCount, FuzzyPartitioningModel};
pub use report::{Report, ReportConfig, ReportConfigBuilder};
