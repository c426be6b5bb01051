//! The extraction schema - the one wire artifact this crate produces.
//!
//! The backend expects a JSON-Schema-shaped object:
//! `{ "type": "object", "properties": { ... }, "required": [] }`.
//! Properties keep insertion order so the serialized request is
//! deterministic for a given field list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::field::FieldType;

/// JSON Schema primitive type of a lowered property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
}

/// One property of the request schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySpec {
    #[serde(rename = "type")]
    pub value_type: PropertyType,

    /// Only ever `"date"`, and only on `string` properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    pub description: String,
}

impl PropertySpec {
    /// Lower a field type + description into the wire property.
    pub fn lower(field_type: FieldType, description: impl Into<String>) -> Self {
        let (value_type, format) = match field_type {
            FieldType::String => (PropertyType::String, None),
            FieldType::Number => (PropertyType::Number, None),
            FieldType::Boolean => (PropertyType::Boolean, None),
            FieldType::Date => (PropertyType::String, Some("date".to_string())),
        };
        Self {
            value_type,
            format,
            description: description.into(),
        }
    }
}

/// The JSON-Schema-shaped request object describing what to extract.
///
/// `required` is always serialized (empty) to match the backend's Swagger
/// request shape exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSchema {
    #[serde(rename = "type")]
    pub schema_type: String,

    pub properties: IndexMap<String, PropertySpec>,

    #[serde(default)]
    pub required: Vec<String>,
}

impl ExtractionSchema {
    /// An empty object schema.
    pub fn object() -> Self {
        Self {
            schema_type: "object".to_string(),
            properties: IndexMap::new(),
            required: Vec::new(),
        }
    }

    /// True when the schema describes no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for ExtractionSchema {
    fn default() -> Self {
        Self::object()
    }
}
