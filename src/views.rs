//! Presentation adapters: shape filtered/aggregated data into the exact
//! row/column form each chart family expects. All functions here are pure
//! and re-run on every interaction; empty input yields empty series and
//! zero-total summary rows, never a panic.

use crate::aggregate::{AggregatedView, aggregate};
use crate::dataset::Dataset;
use crate::error::DashError;
use crate::filter::filter;
use crate::models::{Dimension, FilterSpec, GroupBy, MetricSelection, Record};
use crate::schema::{Schema, resolve_column, split_column};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Overview table: one `(column name, total)` row per column matching an
/// area/production/yield suffix, summed across all given records, in the
/// dataset's column order. Non-suffix columns (e.g. "Dist Code") carry no
/// crop measure and are left out.
pub fn to_summary_table(records: &[Record], schema: &Schema) -> Vec<(String, f64)> {
    schema
        .metric_columns()
        .iter()
        .enumerate()
        .filter(|(_, name)| split_column(name).is_some())
        .map(|(idx, name)| {
            let total: f64 = records.iter().map(|r| r.value_at(idx)).sum();
            (name.clone(), total)
        })
        .collect()
}

/// Line-chart series: one `(year, total)` point per distinct year present in
/// `records`, ascending. Absent years get no synthesized point.
pub fn to_time_series(
    records: &[Record],
    schema: &Schema,
    metric_column: &str,
) -> Result<Vec<(i32, f64)>, DashError> {
    let idx = schema
        .column_index(metric_column)
        .ok_or_else(|| DashError::UnknownColumn(metric_column.to_string()))?;
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for r in records {
        *by_year.entry(r.year).or_insert(0.0) += r.value_at(idx);
    }
    Ok(by_year.into_iter().collect())
}

/// Bar-chart categories: `(group key, total)` pairs in ascending key order,
/// so repeated renders of the same selection produce identical bar layouts.
pub fn to_grouped_bars(view: &AggregatedView) -> Vec<(String, f64)> {
    view.totals.iter().map(|(k, v)| (k.clone(), *v)).collect()
}

/// Choropleth input: state-keyed totals of `metric_column`, ascending by
/// state name, for the geographic view.
pub fn to_choropleth(
    records: &[Record],
    schema: &Schema,
    metric_column: &str,
) -> Result<Vec<(String, f64)>, DashError> {
    let view = aggregate(records, schema, GroupBy::State, metric_column)?;
    Ok(to_grouped_bars(&view))
}

/// One line-chart series of the Trends tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub column: String,
    pub points: Vec<(i32, f64)>,
}

/// The four tab views produced by one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    /// Summary table for the Overview tab.
    pub overview: Vec<(String, f64)>,
    /// One series per crop dimension present in the dataset (up to three:
    /// area, production, yield) for the Trends line charts. Dimensions whose
    /// column the dataset lacks are omitted rather than failing the render.
    pub trends: Vec<TrendSeries>,
    /// Group/value pairs for the Comparisons bar chart.
    pub comparison: Vec<(String, f64)>,
    /// State/value pairs for the Geospatial choropleth.
    pub choropleth: Vec<(String, f64)>,
}

/// Run the full pipeline for one interaction: filter, aggregate, and shape
/// all four views from a single shared [`MetricSelection`].
///
/// One selection drives every tab; a UI wanting per-tab selections calls the
/// individual adapters instead. Deterministic: repeated calls with the same
/// inputs on an unchanged dataset yield identical views.
pub fn render_views(
    dataset: &Dataset,
    spec: &FilterSpec,
    selection: &MetricSelection,
) -> Result<DashboardViews, DashError> {
    let column = selection.resolved_column();
    if !dataset.schema().contains(&column) {
        return Err(DashError::UnknownColumn(column));
    }

    let records = filter(dataset, spec);
    debug!(
        "render cycle: {} of {} records kept, column {:?}",
        records.len(),
        dataset.len(),
        column
    );

    let overview = to_summary_table(&records, dataset.schema());

    let mut trends = Vec::new();
    for dim in Dimension::ALL {
        let trend_column = resolve_column(&selection.crop, dim);
        match to_time_series(&records, dataset.schema(), &trend_column) {
            Ok(points) => trends.push(TrendSeries {
                column: trend_column,
                points,
            }),
            // A crop can lack one of its triplet columns; omit that series.
            Err(DashError::UnknownColumn(_)) => {}
            Err(e) => return Err(e),
        }
    }

    let aggregated = aggregate(&records, dataset.schema(), selection.group_by, &column)?;
    let comparison = to_grouped_bars(&aggregated);
    let choropleth = to_choropleth(&records, dataset.schema(), &column)?;

    Ok(DashboardViews {
        overview,
        trends,
        comparison,
        choropleth,
    })
}
