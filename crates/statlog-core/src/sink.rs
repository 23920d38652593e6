//! The boundary to the external event sink.
//!
//! The emitter hands each accepted record to an [`EventSink`] exactly once,
//! fire-and-forget: validation has already completed, and the core makes no
//! assumption about durability or delivery of the call. Implementations that
//! persist or transmit should enqueue internally and return promptly.

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::record::EventRecord;

/// Receives fully resolved records from the emitter.
pub trait EventSink: Send + Sync {
    fn record(&self, record: EventRecord);
}

/// Sink that emits each record as a structured `tracing` event.
///
/// Useful as a default sink during development and for hosts whose log
/// pipeline already aggregates `tracing` output.
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn record(&self, record: EventRecord) {
        tracing::info!(
            event = "statlog.record",
            group_id = %record.group_id,
            version = record.version,
            event_id = %record.event_id,
            fields = %serde_json::to_string(&record.fields).unwrap_or_default(),
        );
    }
}

/// Sink that forwards records into a `tokio` unbounded channel, bridging
/// synchronous emission into an async collection pipeline.
///
/// Sending never blocks. If the receiving side has shut down the record is
/// dropped with a warning — a dead pipeline degrades collection, it must not
/// degrade the host.
pub struct ChannelSink {
    sender: UnboundedSender<EventRecord>,
}

impl ChannelSink {
    pub fn new(sender: UnboundedSender<EventRecord>) -> Self {
        Self { sender }
    }
}

impl EventSink for ChannelSink {
    fn record(&self, record: EventRecord) {
        if let Err(err) = self.sender.send(record) {
            tracing::warn!(
                event = "statlog.sink_closed",
                event_id = %err.0.event_id,
                "record dropped: channel receiver has shut down"
            );
        }
    }
}
