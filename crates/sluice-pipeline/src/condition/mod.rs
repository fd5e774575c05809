//! Condition layer: admission predicates evaluated once per message.
//!
//! A condition answers a single question, "is this message admissible",
//! as a boolean. Rejection detail is routed to counters and debug logs;
//! it never reaches the caller as an error.

pub mod bounds_check;

use std::sync::Arc;

use sluice_core::error::{Result, SluiceError};
use sluice_core::message::Message;

use crate::config::schema::ConditionConfig;
use crate::obs::metrics::MetricsRegistry;

pub use bounds_check::BoundsCheck;

/// Admission predicate. Implementations must be synchronous,
/// non-blocking, and safe to call concurrently through `&self`.
pub trait Condition: Send + Sync {
    /// Check a message against the configured condition.
    fn check(&self, msg: &Message) -> bool;
}

impl std::fmt::Debug for dyn Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Condition")
    }
}

/// Construct the condition described by `conf`, wiring its counters
/// into `metrics`. Construction is the only fallible step; evaluation
/// never errors.
pub fn new(conf: &ConditionConfig, metrics: &MetricsRegistry) -> Result<Arc<dyn Condition>> {
    match conf.kind.as_str() {
        bounds_check::TYPE => Ok(Arc::new(BoundsCheck::new(
            conf.bounds_check.clone(),
            metrics,
        )?)),
        other => Err(SluiceError::UnknownCondition(other.to_string())),
    }
}
