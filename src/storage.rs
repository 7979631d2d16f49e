//! Export shaped views for an external chart renderer.

use crate::error::DashError;
use crate::views::{DashboardViews, TrendSeries};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save `(label, value)` pairs as a two-column CSV with header.
pub fn save_pairs_csv<P: AsRef<Path>>(
    pairs: &[(String, f64)],
    key_header: &str,
    value_header: &str,
    path: P,
) -> Result<(), DashError> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((key_header, value_header))?;
    for (key, value) in pairs {
        wtr.serialize((key, value))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the trend series in long form: one `(year, column, value)` row per
/// point, with header.
pub fn save_trends_csv<P: AsRef<Path>>(
    trends: &[TrendSeries],
    path: P,
) -> Result<(), DashError> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("year", "metric", "value"))?;
    for series in trends {
        for (year, value) in &series.points {
            wtr.serialize((year, &series.column, value))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save all four views as one pretty JSON document.
pub fn save_views_json<P: AsRef<Path>>(views: &DashboardViews, path: P) -> Result<(), DashError> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(views)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save all four views as CSV files next to `path`, one per view, suffixed
/// `.overview.csv`, `.trend.csv`, `.bars.csv` and `.map.csv` on the stem.
pub fn save_views_csv<P: AsRef<Path>>(views: &DashboardViews, path: P) -> Result<(), DashError> {
    let path = path.as_ref();
    let stem = path.with_extension("");
    let with_suffix = |suffix: &str| {
        let mut s = stem.clone().into_os_string();
        s.push(suffix);
        std::path::PathBuf::from(s)
    };
    save_pairs_csv(&views.overview, "metric", "total", with_suffix(".overview.csv"))?;
    save_trends_csv(&views.trends, with_suffix(".trend.csv"))?;
    save_pairs_csv(&views.comparison, "group", "value", with_suffix(".bars.csv"))?;
    save_pairs_csv(&views.choropleth, "state", "value", with_suffix(".map.csv"))?;
    Ok(())
}
