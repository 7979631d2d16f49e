//! Group filtered records by state or district and sum a metric column.

use crate::error::DashError;
use crate::models::{GroupBy, Record};
use crate::schema::Schema;
use serde::Serialize;
use std::collections::BTreeMap;

/// Grouped-and-summed result ready for chart shaping. Totals iterate in
/// ascending key order; every distinct key present in the input appears
/// exactly once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedView {
    pub column: String,
    pub group_by: GroupBy,
    pub totals: BTreeMap<String, f64>,
}

/// Sum `metric_column` per state or district.
///
/// Missing cells count as 0, so a group whose members are all blank still
/// appears with a 0 total. Fails with [`DashError::UnknownColumn`] when the
/// column is not part of the dataset schema.
pub fn aggregate(
    records: &[Record],
    schema: &Schema,
    group_by: GroupBy,
    metric_column: &str,
) -> Result<AggregatedView, DashError> {
    let idx = schema
        .column_index(metric_column)
        .ok_or_else(|| DashError::UnknownColumn(metric_column.to_string()))?;

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for r in records {
        let key = match group_by {
            GroupBy::State => &r.state,
            GroupBy::District => &r.district,
        };
        *totals.entry(key.clone()).or_insert(0.0) += r.value_at(idx);
    }

    Ok(AggregatedView {
        column: metric_column.to_string(),
        group_by,
        totals,
    })
}
