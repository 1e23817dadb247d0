//! fuzzy-partition: read-only results of fuzzy discretization.
//!
//! A discretizer partitions each continuous feature of a dataset into fuzzy
//! sets, described by their cores (cut points). This crate holds that
//! result and answers questions about it; computing the cut points is left
//! to the caller.
//!
//! # Key Types
//!
//! - [`FuzzyPartitioningModel`] - Immutable feature → cut points mapping
//! - [`FeatureCount`] - Result of the max/min fuzzy-set queries
//! - [`ReportConfig`] - Options for the textual report
//! - [`PartitionError`] - Errors from queries on empty models
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use fuzzy_partition::{FuzzyPartitioningModel, PartitionError};
//!
//! let model = FuzzyPartitioningModel::new(BTreeMap::from([(5, vec![])]));
//! assert_eq!(model.max_fuzzy_sets().unwrap().count, 0);
//! assert!(matches!(
//!     model.min_fuzzy_sets(),
//!     Err(PartitionError::EmptyCollection { .. })
//! ));
//! ```

pub mod error;
pub mod model;

pub use error::{ExtremumQuery, PartitionError, Result};
pub use model::{FeatureCount, FuzzyPartitioningModel, Report, ReportConfig, ReportConfigBuilder};
