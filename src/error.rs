//! Error types for geo-aco.

use thiserror::Error;

/// Result type alias for geo-aco operations.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Unified error type for solver, driver, and I/O operations.
#[derive(Debug, Error)]
pub enum AcoError {
    /// The point set is too small to form a tour.
    #[error("at least 2 points are required to build a tour, got {count}")]
    TooFewPoints {
        /// Number of points supplied.
        count: usize,
    },

    /// A configuration value makes the run impossible.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the offending value.
        message: String,
    },

    /// A malformed input record.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number of the record.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AcoError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
