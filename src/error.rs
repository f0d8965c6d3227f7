//! Error types for the metrics engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    /// No segment contributed a speaker, so there is nothing to measure
    #[error("empty graph: no segment supplied any speaker")]
    EmptyGraph,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Well-formed JSON that does not carry a segment list
    #[error("invalid segment document: {0}")]
    InvalidDocument(String),

    #[error("failed to parse segment JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
