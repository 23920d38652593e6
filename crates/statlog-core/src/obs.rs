//! Structured observability hooks for the emission pipeline.
//!
//! This module provides:
//! - Group-scoped tracing spans via the `GroupSpan` RAII guard
//! - Emission functions for the pipeline's key moments: record forwarded,
//!   value redacted, dangling rule id
//!
//! Events are emitted through `tracing`; wire up a subscriber with
//! [`crate::telemetry::init_tracing`] or the host's own.

use tracing::info;

/// RAII guard that enters a group-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = GroupSpan::enter("ml.completion");
/// // Emission below is associated with group_id = "ml.completion"
/// ```
pub struct GroupSpan {
    _span: tracing::span::EnteredSpan,
}

impl GroupSpan {
    /// Create and enter a span tagged with the group id.
    pub fn enter(group_id: &str) -> Self {
        let span = tracing::info_span!("statlog.group", group_id = %group_id);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a record was validated and forwarded to the sink.
pub fn emit_event_logged(group_id: &str, version: u32, event_id: &str) {
    info!(
        event = "statlog.event_logged",
        group_id = %group_id,
        version = version,
        event_id = %event_id,
    );
}

/// Emit event: a field value was redacted (rejected or undecidable).
///
/// Deliberately does NOT log the offending value — it was just classified
/// as unsafe to collect.
pub fn emit_value_redacted(group_id: &str, event_id: &str, field: &str) {
    info!(
        event = "statlog.value_redacted",
        group_id = %group_id,
        event_id = %event_id,
        field = %field,
    );
}

/// Emit event: a field declares a rule id no registered rule accepts
/// (warning level — this is a host configuration gap).
pub fn emit_unbound_rule(rule_id: &str, field: &str) {
    tracing::warn!(
        event = "statlog.unbound_rule",
        rule_id = %rule_id,
        field = %field,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_span_create() {
        // Just ensure GroupSpan::enter doesn't panic
        let _span = GroupSpan::enter("ml.completion");
    }
}
