//! Domain models for statlog.
//!
//! Canonical definitions for the core entities:
//! - `Field` / `FieldValue`: typed slots and the values bound to them
//! - `EventGroup` / `EventDefinition`: versioned event schemas
//! - `EventRecord`: the resolved record forwarded to the sink
//! - `StructuralError`: the programmer/configuration error taxonomy

pub mod error;
pub mod field;
pub mod record;
pub mod schema;

// Re-export main types and errors
pub use error::{Result, StructuralError};
pub use field::{Field, FieldKind, FieldValue};
pub use record::EventRecord;
pub use schema::{EventDefinition, EventGroup};
