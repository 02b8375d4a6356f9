// ❗ Analysis Errors - one enum for config, generation and export failures

use thiserror::Error;

/// Errors surfaced by configuration, generation and export.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// A caller-supplied value is out of range (e.g. a negative transaction count).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Stable code a front-end can match on.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Json(_) => "JSON_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, AnalysisError>;
