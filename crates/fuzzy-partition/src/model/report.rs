//! Human-readable report of a fuzzy partitioning.
//!
//! The report starts with a short header (feature count, then partitioned
//! and discarded counts) followed by one `<feature> -> [cuts]` line per
//! feature in ascending feature order:
//!
//! ```text
//! Fuzzy partitioning: 3 features
//!   partitioned: 2
//!   discarded: 1
//! 0 -> [1.5, 2.5]
//! 1 -> []
//! 2 -> [3.0]
//! ```

use std::fmt;

use super::FuzzyPartitioningModel;

// ============================================================================
// ReportConfig
// ============================================================================

/// Formatting options for [`FuzzyPartitioningModel::report_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Fixed number of decimal places for cut points.
    /// `None` uses the shortest representation that round-trips.
    pub precision: Option<usize>,

    /// Emit the three header lines (feature, partitioned and discarded counts).
    pub header: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: None,
            header: true,
        }
    }
}

impl ReportConfig {
    /// Create a new builder for ReportConfig.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }
}

/// Builder for ReportConfig.
#[derive(Clone, Debug, Default)]
pub struct ReportConfigBuilder {
    precision: Option<usize>,
    header: Option<bool>,
}

impl ReportConfigBuilder {
    /// Print cut points with a fixed number of decimal places.
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Enable or disable the header lines.
    pub fn header(mut self, enable: bool) -> Self {
        self.header = Some(enable);
        self
    }

    /// Build the config.
    pub fn build(self) -> ReportConfig {
        let default = ReportConfig::default();
        ReportConfig {
            precision: self.precision.or(default.precision),
            header: self.header.unwrap_or(default.header),
        }
    }
}

// ============================================================================
// Report
// ============================================================================

/// Lazily formatted report; see [`FuzzyPartitioningModel::display_with`].
#[derive(Clone, Copy, Debug)]
pub struct Report<'a> {
    model: &'a FuzzyPartitioningModel,
    config: &'a ReportConfig,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;
        let mut first_line = true;

        if self.config.header {
            let n = model.n_features();
            let noun = if n == 1 { "feature" } else { "features" };
            write!(f, "Fuzzy partitioning: {n} {noun}")?;
            write!(f, "\n  partitioned: {}", model.n_partitioned())?;
            write!(f, "\n  discarded: {}", model.n_discarded())?;
            first_line = false;
        }

        for (feature, cuts) in model.features() {
            if !first_line {
                f.write_str("\n")?;
            }
            first_line = false;

            write!(f, "{feature} -> [")?;
            for (i, cut) in cuts.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                match self.config.precision {
                    Some(digits) => write!(f, "{cut:.digits$}")?,
                    None => write!(f, "{cut:?}")?,
                }
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl FuzzyPartitioningModel {
    /// Default report: header plus one line per feature, ascending by index.
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Report rendered with custom formatting options.
    pub fn report_with(&self, config: &ReportConfig) -> String {
        self.display_with(config).to_string()
    }

    /// Report as a [`fmt::Display`] value, for writing without an
    /// intermediate `String`.
    pub fn display_with<'a>(&'a self, config: &'a ReportConfig) -> Report<'a> {
        Report { model: self, config }
    }
}

impl fmt::Display for FuzzyPartitioningModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&ReportConfig::default()), f)
    }
}

// ============================================================================
// Tests
// ============================================================================
