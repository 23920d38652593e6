//! Validation rules and the allow-list decision model.
//!
//! A [`ValidationRule`] classifies a field's runtime string value as
//! [`Decision::Accepted`] or [`Decision::Rejected`]. Rules are matched to
//! fields by id string — [`ValidationRule::accepts`] is the dispatch
//! predicate — so a host can register open-ended rule implementations
//! without the core knowing their concrete types.
//!
//! The canonical rule here is [`AllowListRule`]: whitelist equality against
//! a live, externally owned set, recomputed on every call, with no fallback
//! and no caching. Adding or removing a provider takes effect on the very
//! next emitted event.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// Outcome of validating one field value.
///
/// This is not an error channel: `Rejected` and `Unknown` both end in
/// redaction, never in a raised error, so emission cannot crash the host
/// over untrusted input data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Decision {
    /// The value is a known, safe-to-collect identifier.
    Accepted,

    /// The value is not in the current allow-list.
    Rejected,

    /// The rule could not decide (no rule bound, source unreachable).
    /// Treated identically to `Rejected` by the emitter: fail closed.
    Unknown { reason: String },
}

impl Decision {
    /// Whether the value may be collected verbatim.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted)
    }
}

// ---------------------------------------------------------------------------
// EventContext
// ---------------------------------------------------------------------------

/// Ambient information about the emission a validation runs inside.
///
/// Rules MAY consult this (e.g. to vary behavior per group); the canonical
/// [`AllowListRule`] ignores it and inspects only the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext<'a> {
    pub group_id: &'a str,
    pub version: u32,
    pub event_id: &'a str,
    pub field: &'a str,
}

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// Classifies field values for the rule ids it accepts.
///
/// Implementations are stateless with respect to events: a rule may be
/// backed by a stateful [`AllowListSource`] but holds no per-event state.
/// Registered once at startup, looked up many times, never mutated.
pub trait ValidationRule: Send + Sync {
    /// Dispatch predicate: does this rule handle `rule_id`?
    ///
    /// Must be pure and cheap — it runs on every validation attempt.
    fn accepts(&self, rule_id: &str) -> bool;

    /// Classify `value`. Must treat every call as live; any snapshot it
    /// takes is taken inside this call.
    fn validate(&self, value: &str, ctx: &EventContext<'_>) -> Decision;
}

/// External supplier of the current set of valid identifiers for one rule.
///
/// `current_values` is called synchronously on every validation, so
/// implementations must be bounded-latency (typically an in-memory
/// enumeration of a live registry). The core never caches the result.
pub trait AllowListSource: Send + Sync {
    fn current_values(&self) -> BTreeSet<String>;
}

// ---------------------------------------------------------------------------
// AllowListRule
// ---------------------------------------------------------------------------

/// The canonical allow-list rule: exact, case-sensitive equality of the
/// value against a live snapshot of the bound source.
///
/// No normalization, no partial or prefix match, no caching across calls.
pub struct AllowListRule {
    rule_id: String,
    source: Arc<dyn AllowListSource>,
}

impl AllowListRule {
    pub fn new(rule_id: &str, source: Arc<dyn AllowListSource>) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            source,
        }
    }

    /// The id this rule answers to.
    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }
}

impl ValidationRule for AllowListRule {
    fn accepts(&self, rule_id: &str) -> bool {
        rule_id == self.rule_id
    }

    fn validate(&self, value: &str, _ctx: &EventContext<'_>) -> Decision {
        if self.source.current_values().contains(value) {
            Decision::Accepted
        } else {
            Decision::Rejected
        }
    }
}
