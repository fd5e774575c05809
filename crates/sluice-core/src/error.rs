//! Shared error type across sluice crates.
//!
//! Every variant here is a construction-time failure: loading or
//! validating configuration, wiring observability, building a
//! condition. Evaluating a condition against a message never returns
//! an error; that contract is a boolean only.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SluiceError>;

/// Unified error type used by core and pipeline.
#[derive(Debug, Error)]
pub enum SluiceError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("unknown condition type: {0}")]
    UnknownCondition(String),
    #[error("metric wiring conflict: {0}")]
    MetricConflict(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl SluiceError {
    /// Stable machine-readable kind, for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            SluiceError::InvalidConfig(_) => "INVALID_CONFIG",
            SluiceError::UnsupportedVersion => "UNSUPPORTED_VERSION",
            SluiceError::UnknownCondition(_) => "UNKNOWN_CONDITION",
            SluiceError::MetricConflict(_) => "METRIC_CONFLICT",
            SluiceError::Internal(_) => "INTERNAL",
        }
    }
}
