//! Dataset loading: read the crop CSV once into an immutable row set.

use crate::error::DashError;
use crate::models::Record;
use crate::schema::{DIST_COL, STATE_COL, Schema, YEAR_COL};
use log::{debug, info};
use std::collections::BTreeSet;
use std::path::Path;

/// The full in-memory dataset: every record plus the metric-column schema.
/// Loaded once per process, never mutated; downstream components share it by
/// reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    schema: Schema,
}

impl Dataset {
    /// Load the full dataset from a headered CSV file.
    ///
    /// The header must contain `State Name`, `Dist Name` and `Year`; every
    /// other column is treated as a metric column in file order. A missing
    /// file, a row with the wrong field count, or an unparseable `Year` cell
    /// aborts the load — there are no partial loads. Blank or non-numeric
    /// metric cells load as `None` and aggregate as 0.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DashError> {
        let path = path.as_ref();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| DashError::Load(format!("{}: {}", path.display(), e)))?;

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| DashError::Load(format!("{}: {}", path.display(), e)))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let position = |name: &str| -> Result<usize, DashError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DashError::Load(format!("missing required column {:?}", name)))
        };
        let state_idx = position(STATE_COL)?;
        let dist_idx = position(DIST_COL)?;
        let year_idx = position(YEAR_COL)?;

        let metric_positions: Vec<usize> = (0..headers.len())
            .filter(|&i| i != state_idx && i != dist_idx && i != year_idx)
            .collect();
        let schema = Schema::new(
            metric_positions
                .iter()
                .map(|&i| headers[i].clone())
                .collect(),
        );

        let mut records = Vec::new();
        for (n, row) in rdr.records().enumerate() {
            // Header is line 1, so data row n is on line n + 2.
            let line = n + 2;
            let row = row.map_err(|e| DashError::Load(format!("line {}: {}", line, e)))?;
            if row.len() != headers.len() {
                return Err(DashError::Load(format!(
                    "line {}: expected {} fields, got {}",
                    line,
                    headers.len(),
                    row.len()
                )));
            }
            let year = row[year_idx].trim().parse::<i32>().map_err(|_| {
                DashError::Load(format!(
                    "line {}: unparseable year {:?}",
                    line, &row[year_idx]
                ))
            })?;
            let values = metric_positions
                .iter()
                .map(|&i| row[i].trim().parse::<f64>().ok())
                .collect();
            records.push(Record {
                state: row[state_idx].trim().to_string(),
                district: row[dist_idx].trim().to_string(),
                year,
                values,
            });
        }

        info!(
            "loaded {} records, {} metric columns, {} crops from {}",
            records.len(),
            schema.metric_columns().len(),
            schema.crops().len(),
            path.display()
        );
        Ok(Self { records, schema })
    }

    /// Assemble a dataset from already-built parts. Useful for tests and for
    /// embedders that source records elsewhere.
    pub fn from_parts(schema: Schema, records: Vec<Record>) -> Self {
        Self { records, schema }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct states observed in the data, sorted.
    pub fn states(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.state.clone()).collect()
    }

    /// Observed `(min, max)` year range, or `None` for an empty dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        debug!("observed year range {}..={}", min, max);
        Some((min, max))
    }
}
