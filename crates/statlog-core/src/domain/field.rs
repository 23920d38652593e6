//! Typed field model.
//!
//! A [`Field`] is a named, typed slot inside an event definition. Fields are
//! immutable values: [`Field::with_custom_rule`] produces a derived field
//! rather than mutating the original, so a reusable field (say, a generic
//! `enabled` boolean) can be shared unbound across several definitions while
//! one specific use carries a validation rule.

use serde::{Deserialize, Serialize};

/// The type of value a field accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Boolean,
    Integer,
}

impl FieldKind {
    /// Lowercase name used in error messages and serialized records.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::Integer => "integer",
        }
    }
}

/// A runtime value bound to a field at emission time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Boolean(bool),
    Integer(i64),
}

impl FieldValue {
    /// The kind this value satisfies.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::String(_) => FieldKind::String,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Integer(_) => FieldKind::Integer,
        }
    }

    /// The string payload, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

/// A named, typed slot in an event definition.
///
/// `rule_id` optionally names the validation rule the emitter must run the
/// bound value through. A field without a rule id skips validation entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub rule_id: Option<String>,
}

impl Field {
    /// A string field with no validation rule.
    pub fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::String,
            rule_id: None,
        }
    }

    /// A boolean field.
    pub fn boolean(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Boolean,
            rule_id: None,
        }
    }

    /// An integer field.
    pub fn integer(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Integer,
            rule_id: None,
        }
    }

    /// Derive a field that routes its bound value through the named
    /// validation rule. The receiver is consumed; the original field value
    /// (if cloned beforehand) stays unbound.
    pub fn with_custom_rule(mut self, rule_id: &str) -> Self {
        self.rule_id = Some(rule_id.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_custom_rule_derives_without_touching_original() {
        let plain = Field::string("ranker_id");
        let ruled = plain.clone().with_custom_rule("completion_ranking_model_id");

        assert!(plain.rule_id.is_none());
        assert_eq!(
            ruled.rule_id.as_deref(),
            Some("completion_ranking_model_id")
        );
        assert_eq!(ruled.name, plain.name);
        assert_eq!(ruled.kind, FieldKind::String);
    }

    #[test]
    fn field_value_kinds_match() {
        assert_eq!(FieldValue::from("x").kind(), FieldKind::String);
        assert_eq!(FieldValue::from(true).kind(), FieldKind::Boolean);
        assert_eq!(FieldValue::from(7i64).kind(), FieldKind::Integer);
    }

    #[test]
    fn field_value_serializes_untagged() {
        let json = serde_json::to_string(&FieldValue::from("fast-ranker")).expect("serialize");
        assert_eq!(json, "\"fast-ranker\"");

        let json = serde_json::to_string(&FieldValue::from(false)).expect("serialize");
        assert_eq!(json, "false");
    }
}
