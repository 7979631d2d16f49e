//! Narrow the dataset to selected states and an inclusive year interval.

use crate::dataset::Dataset;
use crate::models::{FilterSpec, Record};

impl FilterSpec {
    /// The selection a dashboard starts with before any user interaction:
    /// every distinct state and the full observed year range, computed from
    /// the data rather than hardcoded.
    pub fn default_for(dataset: &Dataset) -> Self {
        let (year_min, year_max) = dataset.year_range().unwrap_or((0, 0));
        Self {
            states: dataset.states(),
            year_min,
            year_max,
        }
    }
}

/// Keep the records matching `spec`, preserving dataset order.
///
/// Pure and deterministic: identical inputs give identical output. An empty
/// state set yields an empty result.
pub fn filter(dataset: &Dataset, spec: &FilterSpec) -> Vec<Record> {
    dataset
        .records()
        .iter()
        .filter(|r| spec.matches(r))
        .cloned()
        .collect()
}
