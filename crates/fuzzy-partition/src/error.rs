//! Error types for partitioning queries.

use std::fmt;

/// Which extremum query failed to find a candidate feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumQuery {
    /// Largest cut-point count over all features.
    Max,
    /// Smallest cut-point count over non-discarded features.
    Min,
}

impl fmt::Display for ExtremumQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => f.write_str("maximum"),
            Self::Min => f.write_str("minimum"),
        }
    }
}

/// Errors raised by [`FuzzyPartitioningModel`](crate::FuzzyPartitioningModel) queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    /// An extremum was requested but no feature qualifies.
    ///
    /// For [`ExtremumQuery::Max`] the model has no features at all; for
    /// [`ExtremumQuery::Min`] every feature (if any) is discarded.
    #[error("no candidate feature for {query} fuzzy-set count")]
    EmptyCollection { query: ExtremumQuery },

    /// The average fuzzy-set count of a model with no features.
    #[error("average fuzzy-set count is undefined for a model with no features")]
    UndefinedAverage,
}

/// Result type for partitioning queries.
pub type Result<T> = std::result::Result<T, PartitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_query() {
        let max = PartitionError::EmptyCollection { query: ExtremumQuery::Max };
        let min = PartitionError::EmptyCollection { query: ExtremumQuery::Min };
        assert_eq!(max.to_string(), "no candidate feature for maximum fuzzy-set count");
        assert_eq!(min.to_string(), "no candidate feature for minimum fuzzy-set count");
    }

    #[test]
    fn undefined_average_message() {
        assert!(PartitionError::UndefinedAverage.to_string().contains("no features"));
    }
}
