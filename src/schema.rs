//! Column naming rules and the per-dataset crop catalog.
//!
//! Metric columns follow a deterministic naming rule: `"<crop> <suffix>"`
//! with one suffix per [`Dimension`]. The catalog inverts that rule over the
//! actual file header once at load time, so an invalid crop/dimension
//! combination is caught before any aggregation runs.

use crate::models::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identity columns every dataset must carry.
pub const STATE_COL: &str = "State Name";
pub const DIST_COL: &str = "Dist Name";
pub const YEAR_COL: &str = "Year";

/// Build the dataset column name for a crop/dimension pair.
///
/// `resolve_column("Rice", Dimension::Area)` yields `"Rice AREA (1000 ha)"`.
/// Pure string construction; whether the column exists is checked against a
/// [`Schema`] downstream.
pub fn resolve_column(crop: &str, dimension: Dimension) -> String {
    format!("{} {}", crop, dimension.suffix())
}

/// Split a metric column name back into its crop and dimension, if it
/// follows the naming rule.
pub fn split_column(column: &str) -> Option<(&str, Dimension)> {
    for dim in Dimension::ALL {
        if let Some(crop) = column.strip_suffix(dim.suffix()) {
            let crop = crop.trim_end();
            if !crop.is_empty() {
                return Some((crop, dim));
            }
        }
    }
    None
}

/// Metric-column layout of a loaded dataset: the column names in file order,
/// a name → position index, and the crop catalog derived from the names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    metric_columns: Vec<String>,
    index: BTreeMap<String, usize>,
    crops: BTreeSet<String>,
}

impl Schema {
    /// Build a schema from metric column names in file order.
    pub fn new(metric_columns: Vec<String>) -> Self {
        let index = metric_columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        let crops = metric_columns
            .iter()
            .filter_map(|name| split_column(name))
            .map(|(crop, _)| crop.to_string())
            .collect();
        Self {
            metric_columns,
            index,
            crops,
        }
    }

    /// Metric column names in the order they appear in the file. The summary
    /// table follows this order.
    pub fn metric_columns(&self) -> &[String] {
        &self.metric_columns
    }

    /// Position of `column` among the metric columns, if present.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    /// Whether `column` names a metric column of this dataset.
    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }

    /// Crops present in the dataset, sorted and de-duplicated.
    pub fn crops(&self) -> &BTreeSet<String> {
        &self.crops
    }

    /// Typed accessor for the naming rule: position of the column holding
    /// `dimension` for `crop`, or `None` when the dataset lacks it.
    pub fn metric_index(&self, crop: &str, dimension: Dimension) -> Option<usize> {
        self.column_index(&resolve_column(crop, dimension))
    }
}
