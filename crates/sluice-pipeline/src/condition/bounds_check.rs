//! Bounds check condition.
//!
//! Admits a message when its part count and every per-part byte size
//! fall inside configured inclusive limits. Checks run in a fixed
//! order and short-circuit: emptiness, then part count, then part
//! sizes. A structurally invalid message is never inspected for size
//! violations, and the first out-of-bounds part ends the size scan.

use std::sync::Arc;

use tracing::debug;

use sluice_core::error::Result;
use sluice_core::message::Message;

use crate::config::schema::BoundsCheckConfig;
use crate::obs::metrics::{MetricsRegistry, StatCounter};

use super::Condition;

/// Discriminator used in the config `type` field.
pub const TYPE: &str = "bounds_check";

/// Bounds check evaluator. Configuration is immutable after
/// construction; the counters are the only shared mutable state, so a
/// single instance serves any number of concurrent callers.
pub struct BoundsCheck {
    max_parts: usize,
    min_parts: usize,
    max_part_size: usize,
    min_part_size: usize,

    applied: Arc<StatCounter>,
    skipped: Arc<StatCounter>,
    skipped_empty: Arc<StatCounter>,
    skipped_num_parts: Arc<StatCounter>,
    skipped_part_size: Arc<StatCounter>,
}

impl BoundsCheck {
    /// Build the evaluator, resolving its counters up front. Counter
    /// wiring is the only failure mode; there is no partially-wired
    /// evaluator.
    pub fn new(conf: BoundsCheckConfig, metrics: &MetricsRegistry) -> Result<Self> {
        Ok(Self {
            max_parts: conf.max_parts,
            min_parts: conf.min_parts,
            max_part_size: conf.max_part_size,
            min_part_size: conf.min_part_size,
            applied: metrics.counter("condition.bounds_check.applied")?,
            skipped: metrics.counter("condition.bounds_check.skipped")?,
            skipped_empty: metrics.counter("condition.bounds_check.skipped.empty_message")?,
            skipped_num_parts: metrics.counter("condition.bounds_check.skipped.num_parts")?,
            skipped_part_size: metrics.counter("condition.bounds_check.skipped.part_size")?,
        })
    }

    /// Check a message against the configured bounds.
    ///
    /// Exactly one counter outcome fires per call: `applied`, or
    /// `skipped` plus a single sub-reason. The boolean is the entire
    /// caller-facing contract.
    pub fn check(&self, msg: &Message) -> bool {
        match msg.len() {
            0 => {
                debug!("rejecting empty message");
                self.skipped.incr(1);
                self.skipped_empty.incr(1);
                false
            }
            n if n < self.min_parts => {
                debug!(parts = n, min = self.min_parts, "rejecting message below part count minimum");
                self.skipped.incr(1);
                self.skipped_num_parts.incr(1);
                false
            }
            n if n > self.max_parts => {
                debug!(parts = n, max = self.max_parts, "rejecting message above part count limit");
                self.skipped.incr(1);
                self.skipped_num_parts.incr(1);
                false
            }
            _ => {
                // First out-of-bounds part decides; the scan stops there.
                let violation = msg
                    .iter()
                    .map(|p| p.len())
                    .find(|&s| s > self.max_part_size || s < self.min_part_size);

                match violation {
                    Some(size) => {
                        debug!(
                            size,
                            min = self.min_part_size,
                            max = self.max_part_size,
                            "rejecting message due to part size"
                        );
                        self.skipped.incr(1);
                        self.skipped_part_size.incr(1);
                        false
                    }
                    None => {
                        self.applied.incr(1);
                        true
                    }
                }
            }
        }
    }
}

impl Condition for BoundsCheck {
    fn check(&self, msg: &Message) -> bool {
        BoundsCheck::check(self, msg)
    }
}
