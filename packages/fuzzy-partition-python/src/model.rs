//! FuzzyPartitioningModel Python bindings.

use std::collections::{BTreeMap, BTreeSet};

use pyo3::prelude::*;
use pyo3::types::PyDict;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pymethods};

use fuzzy_partition::{FeatureCount, FuzzyPartitioningModel, ReportConfig};

use crate::error::Result;

/// Cut points of every continuous feature after fuzzy discretization.
///
/// The model is immutable: it is built once from a mapping of feature index
/// to cut points and only answers queries afterwards. A feature with an
/// empty cut-point list was discarded.
///
/// # Example
///
/// ```python
/// from fuzzy_partition import FuzzyPartitioningModel
///
/// model = FuzzyPartitioningModel({0: [1.5, 2.5], 1: [], 2: [3.0]})
/// model.total_fuzzy_sets()    # 3
/// model.discarded_features()  # {1}
/// model.max_fuzzy_sets()      # (0, 2)
/// model.to_dict()             # {0: [1.5, 2.5], 1: [], 2: [3.0]}
/// print(model)
/// ```
#[gen_stub_pyclass]
#[pyclass(
    name = "FuzzyPartitioningModel",
    module = "fuzzy_partition._fuzzy_partition_rs",
    frozen
)]
#[derive(Clone, Debug)]
pub struct PyFuzzyPartitioningModel {
    inner: FuzzyPartitioningModel,
}

impl PyFuzzyPartitioningModel {
    /// Borrow the wrapped core model.
    pub fn inner(&self) -> &FuzzyPartitioningModel {
        &self.inner
    }
}

impl From<FuzzyPartitioningModel> for PyFuzzyPartitioningModel {
    fn from(inner: FuzzyPartitioningModel) -> Self {
        Self { inner }
    }
}

fn into_pair(result: fuzzy_partition::Result<FeatureCount>) -> Result<(usize, usize)> {
    Ok(result?.into())
}

fn report_config(precision: Option<usize>, header: bool) -> ReportConfig {
    let builder = ReportConfig::builder().header(header);
    match precision {
        Some(digits) => builder.precision(digits).build(),
        None => builder.build(),
    }
}

#[gen_stub_pymethods]
#[pymethods]
impl PyFuzzyPartitioningModel {
    /// Create a model from a feature → cut points mapping.
    ///
    /// Args:
    ///     cores: Dict mapping feature index to its list of cut points.
    ///         Omitted or None builds an empty model.
    #[new]
    #[pyo3(signature = (cores=None))]
    pub fn new(cores: Option<BTreeMap<usize, Vec<f64>>>) -> Self {
        FuzzyPartitioningModel::new(cores.unwrap_or_default()).into()
    }

    /// Number of features, discarded ones included.
    #[getter]
    pub fn n_features(&self) -> usize {
        self.inner.n_features()
    }

    /// Total number of fuzzy sets over all features.
    pub fn total_fuzzy_sets(&self) -> usize {
        self.inner.total_fuzzy_sets()
    }

    /// Mean number of fuzzy sets per feature.
    ///
    /// Raises:
    ///     ZeroDivisionError: If the model has no features.
    pub fn average_fuzzy_sets(&self) -> PyResult<f64> {
        Ok(self.inner.average_fuzzy_sets().map_err(crate::FuzzyPartitionError::from)?)
    }

    /// Indices of features without cut points.
    pub fn discarded_features(&self) -> BTreeSet<usize> {
        self.inner.discarded_features()
    }

    /// Indices of features with at least one cut point.
    pub fn partitioned_features(&self) -> BTreeSet<usize> {
        self.inner.partitioned_features()
    }

    /// `(feature, count)` of the feature with the most fuzzy sets.
    ///
    /// Discarded features are considered; ties go to the lowest index.
    ///
    /// Raises:
    ///     ValueError: If the model has no features.
    pub fn max_fuzzy_sets(&self) -> PyResult<(usize, usize)> {
        Ok(into_pair(self.inner.max_fuzzy_sets())?)
    }

    /// `(feature, count)` of the non-discarded feature with the fewest fuzzy sets.
    ///
    /// Ties go to the lowest index.
    ///
    /// Raises:
    ///     ValueError: If no feature has cut points.
    pub fn min_fuzzy_sets(&self) -> PyResult<(usize, usize)> {
        Ok(into_pair(self.inner.min_fuzzy_sets())?)
    }

    /// Cut points of one feature, or None if the feature is unknown.
    pub fn cuts(&self, feature: usize) -> Option<Vec<f64>> {
        self.inner.cuts(feature).map(<[f64]>::to_vec)
    }

    /// Independent copy of the cut points as `dict[int, list[float]]`.
    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (feature, cuts) in self.inner.export() {
            dict.set_item(feature, cuts)?;
        }
        Ok(dict)
    }

    /// Human-readable report, one line per feature in ascending order.
    ///
    /// Args:
    ///     precision: Fixed number of decimals for cut points.
    ///     header: Include the feature count summary lines.
    #[pyo3(signature = (precision=None, header=true))]
    pub fn report(&self, precision: Option<usize>, header: bool) -> String {
        self.inner.report_with(&report_config(precision, header))
    }

    fn __len__(&self) -> usize {
        self.inner.n_features()
    }

    fn __str__(&self) -> String {
        self.inner.report()
    }

    fn __repr__(&self) -> String {
        format!(
            "FuzzyPartitioningModel(n_features={}, total_fuzzy_sets={}, discarded={})",
            self.inner.n_features(),
            self.inner.total_fuzzy_sets(),
            self.inner.n_discarded()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
