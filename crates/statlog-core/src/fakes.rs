//! In-memory fakes for the external collaborator traits (testing only)
//!
//! Provides `MemoryEventSink` and `StaticAllowList` that satisfy the trait
//! contracts without any external dependencies.

use std::collections::BTreeSet;
use std::sync::{Mutex, RwLock};

use crate::domain::record::EventRecord;
use crate::rules::AllowListSource;
use crate::sink::EventSink;

// ---------------------------------------------------------------------------
// MemoryEventSink
// ---------------------------------------------------------------------------

/// Event sink that appends every record to an in-memory vector.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    records: Mutex<Vec<EventRecord>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records received so far, in arrival order.
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.lock().expect("sink poisoned").clone()
    }

    /// Number of records received.
    pub fn len(&self) -> usize {
        self.records.lock().expect("sink poisoned").len()
    }

    /// Whether no records have been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, record: EventRecord) {
        self.records.lock().expect("sink poisoned").push(record);
    }
}

// ---------------------------------------------------------------------------
// StaticAllowList
// ---------------------------------------------------------------------------

/// Mutable in-memory allow-list source.
///
/// `insert`/`remove` change the set between validation calls, which makes
/// the live-snapshot contract observable in tests: no cache invalidation is
/// ever required.
#[derive(Debug, Default)]
pub struct StaticAllowList {
    values: RwLock<BTreeSet<String>>,
}

impl StaticAllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source pre-populated with `values`.
    pub fn with_values(values: &[&str]) -> Self {
        Self {
            values: RwLock::new(values.iter().map(|v| v.to_string()).collect()),
        }
    }

    pub fn insert(&self, value: &str) {
        self.values
            .write()
            .expect("allow-list poisoned")
            .insert(value.to_string());
    }

    pub fn remove(&self, value: &str) {
        self.values.write().expect("allow-list poisoned").remove(value);
    }
}

impl AllowListSource for StaticAllowList {
    fn current_values(&self) -> BTreeSet<String> {
        self.values.read().expect("allow-list poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn memory_sink_accumulates_in_order() {
        let sink = MemoryEventSink::new();
        assert!(sink.is_empty());

        for id in ["a", "b"] {
            sink.record(EventRecord {
                group_id: "g".to_string(),
                version: 1,
                event_id: id.to_string(),
                timestamp: Utc::now(),
                fields: Vec::new(),
            });
        }

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event_id, "a");
        assert_eq!(records[1].event_id, "b");
    }

    #[test]
    fn static_allow_list_reflects_mutations() {
        let source = StaticAllowList::with_values(&["fast-ranker"]);
        assert!(source.current_values().contains("fast-ranker"));

        source.insert("slow-ranker");
        source.remove("fast-ranker");

        let values = source.current_values();
        assert!(values.contains("slow-ranker"));
        assert!(!values.contains("fast-ranker"));
    }
}
