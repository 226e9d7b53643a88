use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    /// Averages over zero trials are undefined.
    #[error("no trial results to aggregate")]
    NoData,

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}
