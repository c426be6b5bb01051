//! Schema construction and import.
//!
//! [`build`] lowers an ordered field list into the backend request schema;
//! [`import_from_json`] goes the other way, deriving a field list from a
//! user-supplied JSON Schema document. The two round-trip: a schema built
//! from a duplicate-free field list imports back to an equal list.

mod builder;
mod import;

pub use builder::{build, SchemaBuild};
pub use import::{import_from_json, SchemaImport};
