//! crop-dash
//!
//! The data pipeline behind a state/district crop statistics dashboard: load
//! a static agricultural dataset (area, production, yield by
//! state/district/year), filter it by states and a year range, aggregate by
//! state or district, and shape the results into the four chart-ready views
//! (summary table, time series, grouped bars, choropleth pairs). UI widgets
//! and chart rendering are external; this crate produces their typed inputs.
//!
//! ### Example
//! ```no_run
//! use crop_dash::{Dataset, Dimension, FilterSpec, GroupBy, MetricSelection};
//!
//! let dataset = Dataset::load("crop.csv")?;
//! let spec = FilterSpec::default_for(&dataset);
//! let selection = MetricSelection {
//!     crop: "Rice".into(),
//!     dimension: Dimension::Production,
//!     group_by: GroupBy::State,
//! };
//! let views = crop_dash::views::render_views(&dataset, &spec, &selection)?;
//! println!("{} trend series", views.trends.len());
//! # Ok::<(), crop_dash::DashError>(())
//! ```

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod models;
pub mod schema;
pub mod storage;
pub mod views;

pub use aggregate::{AggregatedView, aggregate};
pub use dataset::Dataset;
pub use error::DashError;
pub use filter::filter;
pub use models::{Dimension, FilterSpec, GroupBy, MetricSelection, Record};
pub use schema::{Schema, resolve_column};
pub use views::{DashboardViews, TrendSeries, render_views};
