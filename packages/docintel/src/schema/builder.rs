//! Lowering field descriptors into the request schema.

use crate::types::field::FieldDescriptor;
use crate::types::schema::{ExtractionSchema, PropertySpec};

/// Output of [`build`]: the wire schema plus the fields that made it in.
#[derive(Debug, Clone)]
pub struct SchemaBuild {
    /// Request schema covering every valid field
    pub schema: ExtractionSchema,

    /// The valid fields, in their original order
    pub valid_fields: Vec<FieldDescriptor>,
}

impl SchemaBuild {
    /// True when no field survived filtering. Not an error at this layer;
    /// the caller decides whether that blocks submission.
    pub fn is_empty(&self) -> bool {
        self.valid_fields.is_empty()
    }
}

/// Build the backend request schema from an ordered field list.
///
/// Fields with a blank trimmed name or description are silently dropped
/// from both outputs. Names and descriptions are trimmed in the schema;
/// duplicate trimmed names keep the last description/type in the mapping
/// while `valid_fields` retains every valid occurrence in input order.
///
/// Pure and total - absence of valid fields is reported structurally, never
/// as an error.
pub fn build(fields: &[FieldDescriptor]) -> SchemaBuild {
    let valid_fields: Vec<FieldDescriptor> =
        fields.iter().filter(|f| f.is_valid()).cloned().collect();

    let mut schema = ExtractionSchema::object();
    for field in &valid_fields {
        schema.properties.insert(
            field.name.trim().to_string(),
            PropertySpec::lower(field.field_type, field.description.trim()),
        );
    }

    SchemaBuild {
        schema,
        valid_fields,
    }
}
