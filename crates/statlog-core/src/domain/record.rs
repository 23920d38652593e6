//! The fully resolved record handed to the event sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::field::FieldValue;

/// One accepted emission, with every field value already validated or
/// redacted.
///
/// `fields` preserves the declaration order of the event definition so that
/// serialization is deterministic. A value equal to
/// [`crate::emitter::REJECTED_VALUE`] means the validation layer redacted
/// the original; under [`crate::emitter::RedactionPolicy::DropField`] the
/// pair is absent instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    /// Group identity, first half.
    pub group_id: String,

    /// Group identity, second half.
    pub version: u32,

    /// Which event shape this record conforms to.
    pub event_id: String,

    /// When the emission happened.
    pub timestamp: DateTime<Utc>,

    /// Resolved `(name, value)` pairs in declaration order.
    pub fields: Vec<(String, FieldValue)>,
}

impl EventRecord {
    /// Look up a resolved value by field name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_roundtrip() {
        let record = EventRecord {
            group_id: "ml.completion".to_string(),
            version: 1,
            event_id: "ranking.settings.changed".to_string(),
            timestamp: Utc::now(),
            fields: vec![
                ("ranker_id".to_string(), FieldValue::from("fast-ranker")),
                ("enabled".to_string(), FieldValue::from(true)),
            ],
        };

        let json = serde_json::to_string(&record).expect("serialize");
        let deserialized: EventRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, deserialized);
    }

    #[test]
    fn field_lookup_by_name() {
        let record = EventRecord {
            group_id: "g".to_string(),
            version: 1,
            event_id: "e".to_string(),
            timestamp: Utc::now(),
            fields: vec![("enabled".to_string(), FieldValue::from(false))],
        };
        assert_eq!(record.field("enabled"), Some(&FieldValue::from(false)));
        assert!(record.field("missing").is_none());
    }
}
