//! Error handling for Python bindings.
//!
//! Core query errors are wrapped here so they can be converted into Python
//! exceptions.

use pyo3::exceptions::{PyValueError, PyZeroDivisionError};
use pyo3::prelude::*;
use thiserror::Error;

use fuzzy_partition::PartitionError;

// =============================================================================
// Error Types
// =============================================================================

/// Errors surfaced to Python by the fuzzy-partition bindings.
#[derive(Debug, Error)]
pub enum FuzzyPartitionError {
    /// A query on the core model failed.
    #[error(transparent)]
    Partition(#[from] PartitionError),
}

// =============================================================================
// Error Conversion
// =============================================================================

impl From<FuzzyPartitionError> for PyErr {
    fn from(err: FuzzyPartitionError) -> PyErr {
        match &err {
            FuzzyPartitionError::Partition(PartitionError::EmptyCollection { .. }) => {
                PyValueError::new_err(err.to_string())
            }
            FuzzyPartitionError::Partition(PartitionError::UndefinedAverage) => {
                PyZeroDivisionError::new_err(err.to_string())
            }
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for binding operations.
pub type Result<T> = std::result::Result<T, FuzzyPartitionError>;

// =============================================================================
// Tests
// =============================================================================
