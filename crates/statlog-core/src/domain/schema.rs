//! Event group and event definition model.
//!
//! An [`EventGroup`] is a named, versioned collection of event shapes.
//! Groups are built once during startup and shared immutably afterwards:
//! `define_event` takes `&mut self`, so once the group is behind an `Arc` or
//! a shared reference there is no way to change it, and concurrent emitters
//! can read it without synchronization.
//!
//! `group_id` + `version` form the group's external identity. Downstream
//! consumers key on the pair, so renaming an event or removing a field is a
//! breaking change to them — bump `version` instead.

use serde::{Deserialize, Serialize};

use super::error::{Result, StructuralError};
use super::field::Field;

/// One event shape: an id plus an ordered list of fields.
///
/// # Invariants
///
/// Field names are unique within a definition (checked at `define_event`
/// time). Field order is significant for deterministic serialization of the
/// emitted record, not for validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDefinition {
    pub id: String,
    pub fields: Vec<Field>,
}

impl EventDefinition {
    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A named, versioned group of event definitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventGroup {
    group_id: String,
    version: u32,
    definitions: Vec<EventDefinition>,
}

impl EventGroup {
    /// Create an empty group. Populate it with [`EventGroup::define_event`]
    /// during startup, then share it immutably.
    pub fn new(group_id: &str, version: u32) -> Self {
        Self {
            group_id: group_id.to_string(),
            version,
            definitions: Vec::new(),
        }
    }

    /// The group's stable wire identity, first half.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The group's stable wire identity, second half.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Register one event shape.
    ///
    /// # Errors
    ///
    /// - `StructuralError::DuplicateEvent` — `event_id` already defined in
    ///   this group.
    /// - `StructuralError::DuplicateField` — two fields share a name.
    pub fn define_event(&mut self, event_id: &str, fields: Vec<Field>) -> Result<&EventDefinition> {
        if self.definitions.iter().any(|d| d.id == event_id) {
            return Err(StructuralError::DuplicateEvent {
                group_id: self.group_id.clone(),
                event_id: event_id.to_string(),
            });
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(StructuralError::DuplicateField {
                    event_id: event_id.to_string(),
                    field: field.name.clone(),
                });
            }
        }

        let idx = self.definitions.len();
        self.definitions.push(EventDefinition {
            id: event_id.to_string(),
            fields,
        });
        Ok(&self.definitions[idx])
    }

    /// Look up a definition by event id.
    pub fn definition(&self, event_id: &str) -> Option<&EventDefinition> {
        self.definitions.iter().find(|d| d.id == event_id)
    }

    /// All definitions in registration order.
    pub fn definitions(&self) -> &[EventDefinition] {
        &self.definitions
    }
}
