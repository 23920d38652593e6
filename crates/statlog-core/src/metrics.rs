//! Global atomic counters for emission observability.
//!
//! Counters are incremented silently at the call site. Call
//! [`Metrics::flush`] to emit current values as a single
//! `tracing::info!` event (e.g. at host shutdown).

use std::sync::atomic::{AtomicU64, Ordering};

/// Global metrics singleton.
pub static METRICS: Metrics = Metrics::new();

/// Lightweight atomic counters — no allocations, no locking.
pub struct Metrics {
    events_emitted: AtomicU64,
    values_redacted: AtomicU64,
    decisions_unknown: AtomicU64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub const fn new() -> Self {
        Self {
            events_emitted: AtomicU64::new(0),
            values_redacted: AtomicU64::new(0),
            decisions_unknown: AtomicU64::new(0),
        }
    }

    /// Increment the events-emitted counter by one.
    pub fn inc_events_emitted(&self) {
        self.events_emitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the values-redacted counter by one.
    pub fn inc_values_redacted(&self) {
        self.values_redacted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the unknown-decisions counter by one.
    ///
    /// Counted in addition to `values_redacted` for the same field: the
    /// ratio distinguishes rejected data from unreachable sources.
    pub fn inc_decisions_unknown(&self) {
        self.decisions_unknown.fetch_add(1, Ordering::Relaxed);
    }

    /// Emit all current counter values as a single `info!` event.
    pub fn flush(&self) {
        tracing::info!(
            metric = "flush",
            events_emitted = self.events_emitted(),
            values_redacted = self.values_redacted(),
            decisions_unknown = self.decisions_unknown(),
        );
    }

    /// Read the current events-emitted count.
    pub fn events_emitted(&self) -> u64 {
        self.events_emitted.load(Ordering::Relaxed)
    }

    /// Read the current values-redacted count.
    pub fn values_redacted(&self) -> u64 {
        self.values_redacted.load(Ordering::Relaxed)
    }

    /// Read the current unknown-decisions count.
    pub fn decisions_unknown(&self) -> u64 {
        self.decisions_unknown.load(Ordering::Relaxed)
    }

    /// Reset all counters to zero (useful in tests).
    pub fn reset(&self) {
        self.events_emitted.store(0, Ordering::Relaxed);
        self.values_redacted.store(0, Ordering::Relaxed);
        self.decisions_unknown.store(0, Ordering::Relaxed);
    }
}
