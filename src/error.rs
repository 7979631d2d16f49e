use thiserror::Error;

/// Errors produced by the dashboard core.
///
/// `Load` is fatal (the dashboard cannot render without a dataset);
/// `UnknownColumn` is recoverable — callers omit the affected series and show
/// a "data unavailable" placeholder instead. An empty filter result is *not*
/// an error: the view adapters return empty sequences for it.
#[derive(Error, Debug)]
pub enum DashError {
    /// File missing/unreadable, malformed row, or required columns absent.
    #[error("failed to load dataset: {0}")]
    Load(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A requested crop/metric combination does not resolve to an existing
    /// dataset column.
    #[error("column {0:?} not found in dataset")]
    UnknownColumn(String),
}
