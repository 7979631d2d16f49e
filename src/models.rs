use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The three measures tracked per crop in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Cultivated area, in 1000 ha.
    Area,
    /// Production volume, in 1000 tons.
    Production,
    /// Yield, in kg per ha.
    Yield,
}

impl Dimension {
    /// Column-name suffix used by the dataset for this dimension.
    pub fn suffix(self) -> &'static str {
        match self {
            Dimension::Area => "AREA (1000 ha)",
            Dimension::Production => "PRODUCTION (1000 tons)",
            Dimension::Yield => "YIELD (Kg per ha)",
        }
    }

    pub const ALL: [Dimension; 3] = [Dimension::Area, Dimension::Production, Dimension::Yield];
}

/// Grouping key used by the comparison views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupBy {
    State,
    District,
}

/// One observational row: identity columns plus the metric cells, aligned to
/// `Schema::metric_columns`. `None` marks a blank or non-numeric cell;
/// aggregation treats it as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub state: String,
    pub district: String,
    pub year: i32,
    pub values: Vec<Option<f64>>,
}

impl Record {
    /// Numeric value of the metric cell at `idx`, with missing cells as 0.
    #[inline]
    pub fn value_at(&self, idx: usize) -> f64 {
        self.values.get(idx).copied().flatten().unwrap_or(0.0)
    }
}

/// User-chosen narrowing criteria: a set of states plus an inclusive year
/// interval. Constructed fresh per interaction; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub states: BTreeSet<String>,
    pub year_min: i32,
    pub year_max: i32,
}

impl FilterSpec {
    /// True iff `record` survives this filter. An empty state set keeps
    /// nothing; there is no implicit select-all.
    pub fn matches(&self, record: &Record) -> bool {
        self.states.contains(&record.state)
            && record.year >= self.year_min
            && record.year <= self.year_max
    }
}

/// User-chosen crop/metric/grouping criteria for the chart views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricSelection {
    pub crop: String,
    pub dimension: Dimension,
    pub group_by: GroupBy,
}

impl MetricSelection {
    /// Dataset column this selection reads. Validity against the actual
    /// schema is checked where the column is used.
    pub fn resolved_column(&self) -> String {
        crate::schema::resolve_column(&self.crop, self.dimension)
    }
}
