//! Per-feature fuzzy partition cores.
//!
//! [`FuzzyPartitioningModel`] holds the result of discretizing every
//! continuous feature of a dataset: for each feature index, the ordered
//! cut points (cores) of its fuzzy sets. A feature with no cut points was
//! discarded by the discretizer.
//!
//! The model is immutable once built. All queries are pure and iterate
//! features in ascending index order, so ties between features always
//! resolve to the lowest index.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use crate::error::{ExtremumQuery, PartitionError, Result};

// ============================================================================
// FeatureCount
// ============================================================================

/// A feature index paired with its number of cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureCount {
    /// Feature index (column position in the original dataset).
    pub feature: usize,
    /// Number of cut points, i.e. fuzzy sets, for this feature.
    pub count: usize,
}

impl FeatureCount {
    /// Create a new feature/count pair.
    pub fn new(feature: usize, count: usize) -> Self {
        Self { feature, count }
    }
}

impl From<FeatureCount> for (usize, usize) {
    fn from(fc: FeatureCount) -> Self {
        (fc.feature, fc.count)
    }
}

impl fmt::Display for FeatureCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "fuzzy set" } else { "fuzzy sets" };
        write!(f, "feature {} ({} {})", self.feature, self.count, noun)
    }
}

// ============================================================================
// FuzzyPartitioningModel
// ============================================================================

/// Cut points of every continuous feature after fuzzy discretization.
///
/// Cut-point sequences are stored exactly as supplied: they are neither
/// sorted nor deduplicated, and feature indices need not be contiguous.
///
/// Equality compares cut points as `f64`, so a model holding a NaN cut point
/// is not equal to itself or to its clone. Compare bit patterns of
/// [`export`](Self::export) when NaN cut points are possible.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use fuzzy_partition::{FeatureCount, FuzzyPartitioningModel};
///
/// let model = FuzzyPartitioningModel::new(BTreeMap::from([
///     (0, vec![1.5, 2.5]),
///     (1, vec![]),
///     (2, vec![3.0]),
/// ]));
///
/// assert_eq!(model.total_fuzzy_sets(), 3);
/// assert_eq!(model.average_fuzzy_sets().unwrap(), 1.0);
/// assert!(model.discarded_features().contains(&1));
/// assert_eq!(model.max_fuzzy_sets().unwrap(), FeatureCount::new(0, 2));
/// assert_eq!(model.min_fuzzy_sets().unwrap(), FeatureCount::new(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FuzzyPartitioningModel {
    /// Feature index → cut points. Empty slice = discarded feature.
    cores: BTreeMap<usize, Box<[f64]>>,
}

impl FuzzyPartitioningModel {
    /// Build a model from a finished feature → cut points mapping.
    ///
    /// The mapping is taken as-is; no validation is performed.
    pub fn new(cores: BTreeMap<usize, Vec<f64>>) -> Self {
        cores.into_iter().collect()
    }

    fn from_cores(cores: BTreeMap<usize, Box<[f64]>>) -> Self {
        let model = Self { cores };
        tracing::debug!(
            n_features = model.n_features(),
            n_discarded = model.n_discarded(),
            total_fuzzy_sets = model.total_fuzzy_sets(),
            "built fuzzy partitioning model"
        );
        model
    }

    // =========================================================================
    // Per-feature access
    // =========================================================================

    /// Number of features in the model, discarded ones included.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.cores.len()
    }

    /// Whether the model has no features at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    /// Cut points of a feature, or `None` if the feature is unknown.
    pub fn cuts(&self, feature: usize) -> Option<&[f64]> {
        self.cores.get(&feature).map(|c| &**c)
    }

    /// Number of fuzzy sets of a feature, or `None` if the feature is unknown.
    pub fn n_fuzzy_sets(&self, feature: usize) -> Option<usize> {
        self.cores.get(&feature).map(|c| c.len())
    }

    /// Whether a known feature was discarded (has no cut points).
    pub fn is_discarded(&self, feature: usize) -> Option<bool> {
        self.cores.get(&feature).map(|c| c.is_empty())
    }

    /// Iterate `(feature, cut points)` in ascending feature order.
    pub fn features(&self) -> impl Iterator<Item = (usize, &[f64])> + '_ {
        self.cores.iter().map(|(&feature, cuts)| (feature, &**cuts))
    }

    /// Iterate feature indices in ascending order.
    pub fn feature_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cores.keys().copied()
    }

    /// Iterate the cut-point count of every feature in ascending feature order.
    pub fn fuzzy_set_counts(&self) -> impl Iterator<Item = FeatureCount> + '_ {
        self.cores
            .iter()
            .map(|(&feature, cuts)| FeatureCount::new(feature, cuts.len()))
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Total number of fuzzy sets over all features.
    ///
    /// Discarded features contribute zero; an empty model yields zero.
    pub fn total_fuzzy_sets(&self) -> usize {
        self.cores.values().map(|c| c.len()).sum()
    }

    /// Mean number of fuzzy sets per feature, discarded features included.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::UndefinedAverage`] if the model has no features.
    pub fn average_fuzzy_sets(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(PartitionError::UndefinedAverage);
        }
        Ok(self.total_fuzzy_sets() as f64 / self.n_features() as f64)
    }

    /// Indices of features that received no cut points.
    pub fn discarded_features(&self) -> BTreeSet<usize> {
        self.cores
            .iter()
            .filter(|(_, cuts)| cuts.is_empty())
            .map(|(&feature, _)| feature)
            .collect()
    }

    /// Indices of features with at least one cut point.
    pub fn partitioned_features(&self) -> BTreeSet<usize> {
        self.cores
            .iter()
            .filter(|(_, cuts)| !cuts.is_empty())
            .map(|(&feature, _)| feature)
            .collect()
    }

    /// Number of discarded features.
    pub fn n_discarded(&self) -> usize {
        self.cores.values().filter(|c| c.is_empty()).count()
    }

    /// Number of features with at least one cut point.
    pub fn n_partitioned(&self) -> usize {
        self.n_features() - self.n_discarded()
    }

    /// Feature with the most fuzzy sets, discarded features included.
    ///
    /// Ties resolve to the lowest feature index. A model whose features are
    /// all discarded reports its lowest feature with a count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::EmptyCollection`] if the model has no features.
    pub fn max_fuzzy_sets(&self) -> Result<FeatureCount> {
        // min_by_key keeps the first of equal elements
        self.fuzzy_set_counts()
            .min_by_key(|fc| Reverse(fc.count))
            .ok_or(PartitionError::EmptyCollection {
                query: ExtremumQuery::Max,
            })
    }

    /// Feature with the fewest fuzzy sets among non-discarded features.
    ///
    /// Ties resolve to the lowest feature index.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::EmptyCollection`] if every feature is
    /// discarded or the model has no features.
    pub fn min_fuzzy_sets(&self) -> Result<FeatureCount> {
        self.fuzzy_set_counts()
            .filter(|fc| fc.count > 0)
            .min_by_key(|fc| fc.count)
            .ok_or(PartitionError::EmptyCollection {
                query: ExtremumQuery::Min,
            })
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Deep copy of the cut points as plain standard containers.
    ///
    /// The returned map shares no storage with the model; mutating it has
    /// no effect on later queries.
    pub fn export(&self) -> BTreeMap<usize, Vec<f64>> {
        self.cores
            .iter()
            .map(|(&feature, cuts)| (feature, cuts.to_vec()))
            .collect()
    }
}

// ============================================================================
// Construction
// ============================================================================

/// Later entries replace earlier ones for the same feature.
impl<C: Into<Box<[f64]>>> FromIterator<(usize, C)> for FuzzyPartitioningModel {
    fn from_iter<I: IntoIterator<Item = (usize, C)>>(iter: I) -> Self {
        let mut cores = BTreeMap::new();
        for (feature, cuts) in iter {
            cores.insert(feature, cuts.into());
        }
        Self::from_cores(cores)
    }
}

impl From<BTreeMap<usize, Vec<f64>>> for FuzzyPartitioningModel {
    fn from(cores: BTreeMap<usize, Vec<f64>>) -> Self {
        Self::new(cores)
    }
}

impl<S: BuildHasher> From<HashMap<usize, Vec<f64>, S>> for FuzzyPartitioningModel {
    fn from(cores: HashMap<usize, Vec<f64>, S>) -> Self {
        cores.into_iter().collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
