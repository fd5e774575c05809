//! Lightweight in-process observability.
//!
//! Counters and gauges are plain atomics behind `Arc` handles; the
//! registry maps stable dotted names to handles and renders the
//! Prometheus text exposition format on demand.

pub mod metrics;
