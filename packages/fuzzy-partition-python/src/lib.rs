//! Python bindings for fuzzy-partition.
//!
//! Exposes [`fuzzy_partition::FuzzyPartitioningModel`] as the
//! `FuzzyPartitioningModel` class of the `fuzzy_partition` package.

use pyo3::prelude::*;
use pyo3_stub_gen::define_stub_info_gatherer;

mod error;
mod model;

pub use error::FuzzyPartitionError;
pub use model::PyFuzzyPartitioningModel;

/// Module initialization.
#[pymodule]
fn _fuzzy_partition_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add_class::<PyFuzzyPartitioningModel>()?;
    Ok(())
}

define_stub_info_gatherer!(stub_info);
