//! Importing a user-supplied JSON Schema document.

use serde_json::Value;

use crate::error::SchemaImportError;
use crate::types::field::{FieldDescriptor, FieldType};

/// Result of a successful import.
///
/// The caller applies this atomically: the whole field list is replaced
/// (destructive import, never a merge), and the batch flag is set to true
/// when hinted - a missing or false hint never downgrades an already-true
/// flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaImport {
    /// Derived fields, in the document's property order
    pub fields: Vec<FieldDescriptor>,

    /// True iff the top-level document carried `batch_extraction: true`
    pub batch_extraction_hint: bool,
}

/// Derive a field list from raw JSON text.
///
/// Three envelope shapes are accepted, in priority order: a wrapper with a
/// `schema` key, a wrapper with an `extraction_schema` key, or the document
/// itself treated as the schema. The first candidate that is a JSON object
/// is resolved; it must then hold a non-empty `properties` object.
///
/// All failures leave the caller's state untouched - nothing is applied
/// until the whole document has been derived.
pub fn import_from_json(raw: &str) -> Result<SchemaImport, SchemaImportError> {
    let doc: Value =
        serde_json::from_str(raw).map_err(|e| SchemaImportError::InvalidJson(e.to_string()))?;

    // Boolean identity, not truthiness: `"true"` or `1` do not count.
    let batch_extraction_hint = matches!(doc.get("batch_extraction"), Some(Value::Bool(true)));

    let schema = resolve_envelope(&doc).ok_or(SchemaImportError::MissingProperties)?;
    let properties = match schema.get("properties") {
        Some(Value::Object(map)) => map,
        _ => return Err(SchemaImportError::MissingProperties),
    };
    if properties.is_empty() {
        return Err(SchemaImportError::EmptySchema);
    }

    let fields: Vec<FieldDescriptor> = properties
        .iter()
        .map(|(name, spec)| derive_field(name, spec))
        .collect();

    tracing::debug!(
        count = fields.len(),
        batch_extraction_hint,
        "derived fields from imported schema"
    );

    Ok(SchemaImport {
        fields,
        batch_extraction_hint,
    })
}

/// Pick the schema object out of the accepted envelope shapes.
fn resolve_envelope(doc: &Value) -> Option<&Value> {
    [doc.get("schema"), doc.get("extraction_schema"), Some(doc)]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_object())
}

/// Derive one field from a property entry; absent keys get defaults.
fn derive_field(name: &str, spec: &Value) -> FieldDescriptor {
    let description = spec
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let raw_type = spec.get("type").and_then(Value::as_str);
    let format = spec.get("format").and_then(Value::as_str);
    FieldDescriptor::new(name, description, FieldType::from_wire(raw_type, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_text_is_invalid_json() {
        let err = import_from_json("{not json").unwrap_err();
        match err {
            SchemaImportError::InvalidJson(message) => assert!(!message.is_empty()),
            other => panic!("expected InvalidJson, got {other:?}"),
        }
    }

    #[test]
    fn test_schema_envelope() {
        let import = import_from_json(
            r#"{"schema": {"properties": {"vendor": {"type": "string", "description": "Vendor name"}}}}"#,
        )
        .unwrap();
        assert_eq!(
            import.fields,
            vec![FieldDescriptor::new("vendor", "Vendor name", FieldType::String)]
        );
        assert!(!import.batch_extraction_hint);
    }

    #[test]
    fn test_extraction_schema_envelope_with_date_format() {
        let import = import_from_json(
            r#"{"extraction_schema": {"properties": {"due_date": {"type": "string", "format": "date", "description": "Due date"}}}}"#,
        )
        .unwrap();
        assert_eq!(
            import.fields,
            vec![FieldDescriptor::new("due_date", "Due date", FieldType::Date)]
        );
    }

    #[test]
    fn test_bare_schema_envelope() {
        let import = import_from_json(
            r#"{"properties": {"total": {"type": "number", "description": "Grand total"}}}"#,
        )
        .unwrap();
        assert_eq!(import.fields[0].field_type, FieldType::Number);
    }

    #[test]
    fn test_envelope_priority_skips_non_object_candidates() {
        // `schema` is not an object, so `extraction_schema` wins.
        let import = import_from_json(
            r#"{"schema": "nope", "extraction_schema": {"properties": {"a": {"description": "A"}}}}"#,
        )
        .unwrap();
        assert_eq!(import.fields[0].name, "a");
    }

    #[test]
    fn test_missing_properties() {
        assert_eq!(
            import_from_json(r#"{"schema": {"title": "no properties here"}}"#).unwrap_err(),
            SchemaImportError::MissingProperties
        );
        // `properties` present but not an object is equally unusable.
        assert_eq!(
            import_from_json(r#"{"properties": 7}"#).unwrap_err(),
            SchemaImportError::MissingProperties
        );
        // A non-object document resolves no envelope at all.
        assert_eq!(
            import_from_json("[1, 2, 3]").unwrap_err(),
            SchemaImportError::MissingProperties
        );
    }

    #[test]
    fn test_empty_properties() {
        assert_eq!(
            import_from_json(r#"{"schema": {"properties": {}}}"#).unwrap_err(),
            SchemaImportError::EmptySchema
        );
    }

    #[test]
    fn test_property_order_is_parse_order() {
        let import = import_from_json(
            r#"{"properties": {"zebra": {"description": "z"}, "apple": {"description": "a"}}}"#,
        )
        .unwrap();
        let names: Vec<&str> = import.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["zebra", "apple"]);
    }

    #[test]
    fn test_defaults_for_absent_keys() {
        let import = import_from_json(r#"{"properties": {"bare": {}}}"#).unwrap();
        assert_eq!(
            import.fields,
            vec![FieldDescriptor::new("bare", "", FieldType::String)]
        );
    }

    #[test]
    fn test_batch_hint_is_boolean_identity() {
        let base = r#"{"properties": {"a": {"description": "A"}}"#;
        let hinted = import_from_json(&format!("{base}, \"batch_extraction\": true}}")).unwrap();
        assert!(hinted.batch_extraction_hint);

        for non_hint in ["false", "1", "\"true\"", "null"] {
            let import =
                import_from_json(&format!("{base}, \"batch_extraction\": {non_hint}}}")).unwrap();
            assert!(!import.batch_extraction_hint, "hinted by {non_hint}");
        }
    }

    #[test]
    fn test_hint_read_from_top_level_only() {
        // A hint nested inside the schema object is not the wrapper's hint.
        let import = import_from_json(
            r#"{"schema": {"batch_extraction": true, "properties": {"a": {"description": "A"}}}}"#,
        )
        .unwrap();
        assert!(!import.batch_extraction_hint);
    }
}
