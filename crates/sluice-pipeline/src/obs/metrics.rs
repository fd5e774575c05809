//! Minimal metrics registry for pipeline components.
//!
//! No external metrics crates are used; handles are atomics backed by
//! a `DashMap` keyed on the dotted metric name. Components resolve
//! their handles once at construction and increment on the hot path
//! without touching the map again. Names are sanitized to
//! Prometheus-legal identifiers only at render time.

use std::fmt::Write;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use sluice_core::error::{Result, SluiceError};

/// Monotonic counter. Increment-only; relaxed ordering is sufficient
/// because no other memory is published through these values.
#[derive(Debug, Default)]
pub struct StatCounter {
    value: AtomicU64,
}

impl StatCounter {
    /// Increment by an arbitrary value.
    pub fn incr(&self, v: u64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}

/// Signed gauge.
#[derive(Debug, Default)]
pub struct StatGauge {
    value: AtomicI64,
}

impl StatGauge {
    /// Add a signed delta.
    pub fn add(&self, v: i64) {
        self.value.fetch_add(v, Ordering::Relaxed);
    }

    /// Overwrite the value.
    pub fn set(&self, v: i64) {
        self.value.store(v, Ordering::Relaxed);
    }

    /// Current value.
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}

enum Metric {
    Counter(Arc<StatCounter>),
    Gauge(Arc<StatGauge>),
}

/// Name-keyed registry handed to condition constructors.
///
/// Resolving a name that is already registered as a different metric
/// kind is a wiring error; the caller gets no partially-wired
/// component in that case.
#[derive(Default)]
pub struct MetricsRegistry {
    metrics: DashMap<String, Metric>,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve (registering on first use) a counter handle.
    pub fn counter(&self, name: &str) -> Result<Arc<StatCounter>> {
        let entry = self
            .metrics
            .entry(name.to_string())
            .or_insert_with(|| Metric::Counter(Arc::new(StatCounter::default())));
        match entry.value() {
            Metric::Counter(c) => Ok(c.clone()),
            Metric::Gauge(_) => Err(SluiceError::MetricConflict(format!(
                "{name} is already registered as a gauge"
            ))),
        }
    }

    /// Resolve (registering on first use) a gauge handle.
    pub fn gauge(&self, name: &str) -> Result<Arc<StatGauge>> {
        let entry = self
            .metrics
            .entry(name.to_string())
            .or_insert_with(|| Metric::Gauge(Arc::new(StatGauge::default())));
        match entry.value() {
            Metric::Gauge(g) => Ok(g.clone()),
            Metric::Counter(_) => Err(SluiceError::MetricConflict(format!(
                "{name} is already registered as a counter"
            ))),
        }
    }

    /// Render all registered metrics in Prometheus text exposition
    /// format, sorted by name for deterministic output.
    pub fn render(&self) -> String {
        let mut rows: Vec<(String, &'static str, i128)> = self
            .metrics
            .iter()
            .map(|r| match r.value() {
                Metric::Counter(c) => (sanitize(r.key()), "counter", i128::from(c.get())),
                Metric::Gauge(g) => (sanitize(r.key()), "gauge", i128::from(g.get())),
            })
            .collect();
        rows.sort();

        let mut out = String::new();
        for (name, kind, v) in rows {
            let _ = writeln!(out, "# TYPE {name} {kind}");
            let _ = writeln!(out, "{name} {v}");
        }
        out
    }
}

/// Map dotted names onto the Prometheus identifier alphabet.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
