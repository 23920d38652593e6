//! Domain-level error taxonomy for statlog.
//!
//! Structural errors are programmer/configuration bugs (bad schema wiring,
//! bad bindings) and are always surfaced to the caller. Validation outcomes
//! are NOT errors — see [`crate::rules::Decision`] — because emission must
//! never crash the host over untrusted runtime data.

/// Errors produced by schema definition and event emission.
#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    #[error("event '{event_id}' already defined in group '{group_id}'")]
    DuplicateEvent { group_id: String, event_id: String },

    #[error("event '{event_id}' declares field '{field}' more than once")]
    DuplicateField { event_id: String, field: String },

    #[error("event '{event_id}' has no binding for required field '{field}'")]
    MissingField { event_id: String, field: String },

    #[error("event '{event_id}' has a binding for undeclared field '{field}'")]
    UnknownField { event_id: String, field: String },

    #[error("field '{field}' of event '{event_id}' expects {expected} but was bound to {actual}")]
    TypeMismatch {
        event_id: String,
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("no registered validation rule accepts rule id '{rule_id}'")]
    NoRuleBound { rule_id: String },

    #[error("group '{group_id}' defines no event '{event_id}'")]
    UnknownEvent { group_id: String, event_id: String },
}

/// Result type for statlog domain operations.
pub type Result<T> = std::result::Result<T, StructuralError>;
