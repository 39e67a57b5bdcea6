//! Error types for scenario setup and output.

use thiserror::Error;

/// Errors raised before a run starts or while exporting its results.
///
/// The run itself cannot fail: intercept and timeout are both valid
/// terminal outcomes reported through [`crate::sim::EngagementStatus`].
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value is NaN or infinite.
    #[error("non-finite value for `{field}`")]
    NonFinite { field: &'static str },

    /// Timestep must be strictly positive.
    #[error("invalid timestep {0} s (must be > 0)")]
    InvalidTimestep(f64),

    /// Duration must not be negative.
    #[error("invalid duration {0} s (must be >= 0)")]
    InvalidDuration(f64),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for simulation setup and output.
pub type Result<T> = std::result::Result<T, SimError>;

/// Reject NaN/inf for a named scalar.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonFinite { field })
    }
}
