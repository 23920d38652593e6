//! Statlog Core Library
//!
//! Privacy-aware usage-statistics emission: hosts declare versioned event
//! schemas, emit events against them, and have free-text field values
//! checked against live, externally owned allow-lists before anything
//! reaches the event sink. Rejected or undecidable values are redacted,
//! never raised — emission must not disturb the host's control flow.

pub mod collectors;
pub mod domain;
pub mod emitter;
pub mod fakes;
pub mod metrics;
pub mod obs;
pub mod providers;
pub mod registry;
pub mod rules;
pub mod sink;
pub mod telemetry;

pub use domain::{
    EventDefinition, EventGroup, EventRecord, Field, FieldKind, FieldValue, Result,
    StructuralError,
};

pub use emitter::{Emitter, EmitterConfig, RedactionPolicy, REJECTED_VALUE};

pub use registry::ValidationRegistry;

pub use rules::{AllowListRule, AllowListSource, Decision, EventContext, ValidationRule};

pub use sink::{ChannelSink, EventSink, TracingSink};

pub use providers::{ProviderAllowList, ProviderRegistry};

pub use collectors::RankingSettingsCollector;

pub use metrics::METRICS;
pub use obs::{emit_event_logged, emit_unbound_rule, emit_value_redacted, GroupSpan};
pub use telemetry::{init_tracing, LogFormat};

/// Statlog version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
