//! Front-End Core for a Document-Extraction Service
//!
//! Pure data-transformation code backing the extraction front-end: a user
//! authors a list of named fields, this crate lowers them into the JSON
//! Schema the backend expects, and turns the heterogeneous result payload
//! back into deterministic display rows.
//!
//! # Design Philosophy
//!
//! - Callers own all mutable state (field list, expanded-row set)
//! - Core functions take full inputs and return new values - no shared state
//! - External payloads are trusted in shape but deserialized tolerantly
//! - Shape errors become typed values at the boundary, never panics
//!
//! # Usage
//!
//! ```rust,ignore
//! use docintel::{build, import_from_json, to_display_rows, FieldDescriptor, FieldType};
//!
//! let fields = vec![FieldDescriptor::new("loan_amount", "Total loan", FieldType::Number)];
//! let built = build(&fields);
//! assert_eq!(built.valid_fields.len(), 1);
//!
//! // Send built.schema to the backend, then present the response:
//! let rows = to_display_rows(&result, &expanded_keys);
//! ```
//!
//! # Modules
//!
//! - [`types`] - Field descriptors, the wire schema, and the result payload
//! - [`schema`] - Schema construction ([`build`]) and import ([`import_from_json`])
//! - [`present`] - Result normalization and display-row derivation
//! - [`error`] - Typed error taxonomy

pub mod error;
pub mod present;
pub mod schema;
pub mod types;

// Re-export core types at crate root
pub use error::{SchemaImportError, ValidationError};
pub use present::{
    classify_confidence, has_any_extracted_value, is_long_value, normalize_value,
    to_display_rows, ConfidenceTier, DisplayRow, LONG_VALUE_THRESHOLD,
};
pub use schema::{build, import_from_json, SchemaBuild, SchemaImport};
pub use types::{
    field::{FieldDescriptor, FieldType},
    result::{ExtractionMetadata, ExtractionResult, FieldProvenance, SourceRef},
    schema::{ExtractionSchema, PropertySpec, PropertyType},
};
