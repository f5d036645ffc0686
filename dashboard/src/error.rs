//! Errors raised while loading or validating dashboard data.

use std::path::PathBuf;

/// Failure to load or validate [`crate::types::DashboardData`].
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Data file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Data file is not valid JSON for the data model
    #[error("invalid dashboard data: {0}")]
    Json(#[from] serde_json::Error),

    /// Span outside `1..=3`
    #[error("span must be 1, 2 or 3, got {0}")]
    InvalidSpan(u8),

    /// Category counts do not add up to the stated total
    #[error("category counts sum to {actual}, expected total {expected}")]
    CategoryCountMismatch {
        /// Stated total
        expected: u64,
        /// Sum of category counts
        actual: u64,
    },

    /// Category counts add up to more than a `u64` holds
    #[error("category counts overflow, expected total {expected}")]
    CategoryCountOverflow {
        /// Stated total
        expected: u64,
    },

    /// Category percentages are more than 0.1 away from 100
    #[error("category percentages sum to {sum:.2}, expected 100 (±0.1)")]
    CategoryPercentDrift {
        /// Sum of category percentages
        sum: f64,
    },

    /// Variant slug not recognised
    #[error("unknown dashboard variant '{0}' (expected uptime-wall, uptime-bars or coverage)")]
    UnknownVariant(String),
}
