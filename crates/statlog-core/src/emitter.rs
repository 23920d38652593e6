//! Emission engine.
//!
//! [`Emitter::emit`] resolves caller bindings against an event definition,
//! runs every rule-bound string value through the [`ValidationRegistry`],
//! and forwards the resolved record to the sink — exactly once per call,
//! synchronously with respect to validation. Rejected values never fail the
//! emission; they are redacted in place. Only structural problems (missing
//! or undeclared fields, kind mismatches, unknown event ids) raise.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, StructuralError};
use crate::domain::field::FieldValue;
use crate::domain::record::EventRecord;
use crate::domain::schema::EventGroup;
use crate::metrics::METRICS;
use crate::obs;
use crate::registry::ValidationRegistry;
use crate::rules::{Decision, EventContext};
use crate::sink::EventSink;

/// Sentinel substituted for any value the validation layer refuses.
///
/// Deliberately distinct from the empty string so consumers can tell
/// "rejected" apart from "legitimately empty".
pub const REJECTED_VALUE: &str = "validation.rejected";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// What happens to a field whose value was rejected.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RedactionPolicy {
    /// Replace the value with [`REJECTED_VALUE`]. The default: consumers
    /// keep seeing the field and can count redactions.
    #[default]
    Sentinel,

    /// Omit the `(name, value)` pair from the record entirely. For hosts
    /// whose consumers treat absence as redaction.
    DropField,
}

/// Emitter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmitterConfig {
    pub redaction: RedactionPolicy,
}

impl EmitterConfig {
    /// Override the redaction policy (builder pattern).
    pub fn with_redaction(mut self, redaction: RedactionPolicy) -> Self {
        self.redaction = redaction;
        self
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

/// Validates field bindings and forwards accepted records to the sink.
pub struct Emitter {
    registry: Arc<ValidationRegistry>,
    sink: Arc<dyn EventSink>,
    config: EmitterConfig,
}

impl Emitter {
    pub fn new(registry: Arc<ValidationRegistry>, sink: Arc<dyn EventSink>) -> Self {
        Self {
            registry,
            sink,
            config: EmitterConfig::default(),
        }
    }

    /// Override the default configuration (builder pattern).
    pub fn with_config(mut self, config: EmitterConfig) -> Self {
        self.config = config;
        self
    }

    /// Emit one event.
    ///
    /// Every declared field must be bound — there are no optional fields —
    /// and every binding must name a declared field of the right kind.
    /// Rule-bound string values are classified by the resolved rule;
    /// `Rejected` and `Unknown` both redact (fail closed), never raise.
    ///
    /// All-or-nothing: a structural error aborts before the sink sees
    /// anything; otherwise the sink receives exactly one record.
    ///
    /// # Errors
    ///
    /// - `StructuralError::UnknownEvent` — `event_id` not defined in `group`.
    /// - `StructuralError::UnknownField` — a binding names no declared field.
    /// - `StructuralError::MissingField` — a declared field has no binding.
    /// - `StructuralError::TypeMismatch` — a binding has the wrong kind.
    pub fn emit(
        &self,
        group: &EventGroup,
        event_id: &str,
        bindings: &[(&str, FieldValue)],
    ) -> Result<()> {
        let definition =
            group
                .definition(event_id)
                .ok_or_else(|| StructuralError::UnknownEvent {
                    group_id: group.group_id().to_string(),
                    event_id: event_id.to_string(),
                })?;

        for (name, _) in bindings {
            if definition.field(name).is_none() {
                return Err(StructuralError::UnknownField {
                    event_id: event_id.to_string(),
                    field: name.to_string(),
                });
            }
        }

        let mut resolved = Vec::with_capacity(definition.fields.len());
        for field in &definition.fields {
            let value = bindings
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| value)
                .ok_or_else(|| StructuralError::MissingField {
                    event_id: event_id.to_string(),
                    field: field.name.clone(),
                })?;

            if value.kind() != field.kind {
                return Err(StructuralError::TypeMismatch {
                    event_id: event_id.to_string(),
                    field: field.name.clone(),
                    expected: field.kind.name(),
                    actual: value.kind().name(),
                });
            }

            match self.classify(group, event_id, field.rule_id.as_deref(), &field.name, value) {
                Decision::Accepted => resolved.push((field.name.clone(), value.clone())),
                decision => {
                    METRICS.inc_values_redacted();
                    if matches!(decision, Decision::Unknown { .. }) {
                        METRICS.inc_decisions_unknown();
                    }
                    obs::emit_value_redacted(group.group_id(), event_id, &field.name);
                    match self.config.redaction {
                        RedactionPolicy::Sentinel => resolved
                            .push((field.name.clone(), FieldValue::String(REJECTED_VALUE.into()))),
                        RedactionPolicy::DropField => {}
                    }
                }
            }
        }

        let record = EventRecord {
            group_id: group.group_id().to_string(),
            version: group.version(),
            event_id: event_id.to_string(),
            timestamp: Utc::now(),
            fields: resolved,
        };

        METRICS.inc_events_emitted();
        obs::emit_event_logged(group.group_id(), group.version(), event_id);
        self.sink.record(record);
        Ok(())
    }

    /// Classify one bound value. Fields without a rule id — and non-string
    /// fields, which custom rules do not cover — pass through unchanged.
    fn classify(
        &self,
        group: &EventGroup,
        event_id: &str,
        rule_id: Option<&str>,
        field: &str,
        value: &FieldValue,
    ) -> Decision {
        let (rule_id, text) = match (rule_id, value.as_str()) {
            (Some(rule_id), Some(text)) => (rule_id, text),
            _ => return Decision::Accepted,
        };

        let ctx = EventContext {
            group_id: group.group_id(),
            version: group.version(),
            event_id,
            field,
        };

        match self.registry.resolve(rule_id) {
            Ok(rule) => rule.validate(text, &ctx),
            Err(_) => {
                // Fail closed: a dangling rule id is a configuration gap,
                // not a reason to crash the host or to leak the value.
                obs::emit_unbound_rule(rule_id, field);
                Decision::Unknown {
                    reason: format!("no registered rule accepts '{}'", rule_id),
                }
            }
        }
    }
}
