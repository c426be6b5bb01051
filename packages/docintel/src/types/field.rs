//! Field descriptors - the user-authored specification of what to extract.

use serde::{Deserialize, Serialize};

/// Value type a field is extracted as.
///
/// `Date` is a front-end refinement with no JSON Schema primitive of its
/// own; on the wire it is lowered to a `string` with `format: "date"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text
    #[default]
    String,

    /// Numeric value
    Number,

    /// Calendar date
    Date,

    /// True/false value
    Boolean,
}

impl FieldType {
    /// All variants, in the order the field editor offers them.
    pub const ALL: [FieldType; 4] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Date,
        FieldType::Boolean,
    ];

    /// Human-readable label for menus.
    pub fn label(self) -> &'static str {
        match self {
            FieldType::String => "Text (string)",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Boolean => "Boolean",
        }
    }

    /// Resolve a raw JSON Schema `type`/`format` pair into a field type.
    ///
    /// Unrecognized or absent raw types fall back to `String`. A `string`
    /// (explicit or defaulted) with `format: "date"` becomes `Date`; the
    /// format is ignored for every other raw type.
    pub fn from_wire(raw_type: Option<&str>, format: Option<&str>) -> Self {
        match raw_type.unwrap_or("string") {
            "number" => FieldType::Number,
            "boolean" => FieldType::Boolean,
            "string" if format == Some("date") => FieldType::Date,
            _ => FieldType::String,
        }
    }
}

/// One value the user wants extracted from the document.
///
/// Descriptors have no identity beyond list position and name uniqueness is
/// not enforced; the schema builder applies last-write-wins when duplicate
/// names collide in the lowered mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Machine-oriented field name (e.g. `loan_amount`)
    pub name: String,

    /// Natural-language description guiding the extraction model
    pub description: String,

    /// Expected value type
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
}

impl FieldDescriptor {
    /// Create a new descriptor.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            field_type,
        }
    }

    /// An empty text field, as the editor seeds new rows.
    pub fn blank() -> Self {
        Self::new("", "", FieldType::String)
    }

    /// A field takes part in an extraction request iff both its trimmed
    /// name and trimmed description are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}
