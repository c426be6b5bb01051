//! Presentation of extraction results.
//!
//! Pure functions that turn the raw backend payload into display rows:
//! value normalization, long-value classification, confidence tiers, and
//! the presence gate the shell applies before accepting a result. No
//! function here performs I/O or touches shared state; the expanded-row set
//! is owned and mutated only by the shell.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::Value;

use crate::types::result::ExtractionResult;

/// Values at or past this many characters collapse behind an expand toggle.
pub const LONG_VALUE_THRESHOLD: usize = 140;

/// Confidence bucket for a single extracted field.
///
/// Lower bounds are inclusive: exactly 0.70 is `Medium`, exactly 0.90 is
/// `High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// `>= 0.90`
    High,

    /// `0.70 <= c < 0.90`
    Medium,

    /// `< 0.70`
    Low,

    /// The backend reported no confidence; rendered as a neutral
    /// placeholder, never as zero
    Unknown,
}

/// One table row derived from an extraction result.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    /// Field name, as keyed in the payload
    pub key: String,

    /// Normalized value; `None` renders as "Not found"
    pub display_value: Option<String>,

    /// Whether the value collapses behind an expand toggle
    pub is_long: bool,

    /// Transient UI state, keyed by field name and owned by the shell
    pub expanded: bool,

    /// Confidence bucket from per-field provenance
    pub confidence_tier: ConfidenceTier,

    /// 1-based source page, when provenance pinpointed one
    pub source_page: Option<u64>,
}

/// Normalize a raw extracted value for display.
///
/// `null` becomes `None`. Strings pass through unmodified - a
/// whitespace-only value displays as blank rather than being trimmed into
/// "not found". Objects and arrays are pretty-printed with 2-space
/// indentation, falling back to the compact form if serialization fails.
pub fn normalize_value(raw: &Value) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "true" } else { "false" }.to_string()),
        other => Some(serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())),
    }
}

/// Whether a normalized value needs an expand/collapse toggle.
///
/// Multi-line values count as long regardless of length: a short value
/// containing a line break still cannot render inline.
pub fn is_long_value(value: Option<&str>) -> bool {
    match value {
        None | Some("") => false,
        Some(s) => s.chars().count() >= LONG_VALUE_THRESHOLD || s.contains('\n'),
    }
}

/// Bucket a per-field confidence score.
pub fn classify_confidence(confidence: Option<f64>) -> ConfidenceTier {
    match confidence {
        None => ConfidenceTier::Unknown,
        Some(c) if c >= 0.90 => ConfidenceTier::High,
        Some(c) if c >= 0.70 => ConfidenceTier::Medium,
        Some(_) => ConfidenceTier::Low,
    }
}

/// Derive display rows from a result, in the payload's own key order.
///
/// Each key is joined with its provenance entry (absent entries yield an
/// unknown tier and no page). `expanded_keys` is read, never mutated;
/// toggling rows is the shell's job.
pub fn to_display_rows(
    result: &ExtractionResult,
    expanded_keys: &HashSet<String>,
) -> Vec<DisplayRow> {
    result
        .extraction
        .iter()
        .map(|(key, raw)| {
            let provenance = result.provenance_for(key);
            let display_value = normalize_value(raw);
            let is_long = is_long_value(display_value.as_deref());
            DisplayRow {
                key: key.clone(),
                display_value,
                is_long,
                expanded: expanded_keys.contains(key),
                confidence_tier: classify_confidence(provenance.and_then(|p| p.confidence)),
                source_page: provenance.and_then(|p| p.page_number()),
            }
        })
        .collect()
}

/// Whether a result carries at least one real value.
///
/// Strings must have non-blank content after trimming; any other non-null
/// value counts unconditionally - `0`, `false` and `{}` are legitimate
/// extracted answers, while an empty string is indistinguishable from "not
/// found".
pub fn has_any_extracted_value(extraction: &IndexMap<String, Value>) -> bool {
    extraction.values().any(|value| match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::indexmap;
    use serde_json::json;

    #[test]
    fn test_normalize_null_is_absent() {
        assert_eq!(normalize_value(&Value::Null), None);
    }

    #[test]
    fn test_normalize_string_passes_through_untrimmed() {
        assert_eq!(normalize_value(&json!("  hello ")), Some("  hello ".into()));
        assert_eq!(normalize_value(&json!("   ")), Some("   ".into()));
    }

    #[test]
    fn test_normalize_scalars() {
        assert_eq!(normalize_value(&json!(42)), Some("42".into()));
        assert_eq!(normalize_value(&json!(3.5)), Some("3.5".into()));
        assert_eq!(normalize_value(&json!(true)), Some("true".into()));
        assert_eq!(normalize_value(&json!(false)), Some("false".into()));
    }

    #[test]
    fn test_normalize_object_pretty_prints() {
        let value = json!({"street": "1 Main St", "city": "Springfield"});
        let normalized = normalize_value(&value).unwrap();
        assert!(normalized.contains("\n  \"street\": \"1 Main St\""));
        assert!(normalized.starts_with('{'));
    }

    #[test]
    fn test_long_value_threshold() {
        let at_threshold = "x".repeat(140);
        let under_threshold = "x".repeat(139);
        assert!(is_long_value(Some(at_threshold.as_str())));
        assert!(!is_long_value(Some(under_threshold.as_str())));
        assert!(is_long_value(Some("short\nmultiline")));
        assert!(!is_long_value(Some("short")));
        assert!(!is_long_value(Some("")));
        assert!(!is_long_value(None));
    }

    #[test]
    fn test_confidence_tier_boundaries() {
        assert_eq!(classify_confidence(Some(0.90)), ConfidenceTier::High);
        assert_eq!(classify_confidence(Some(0.899)), ConfidenceTier::Medium);
        assert_eq!(classify_confidence(Some(0.70)), ConfidenceTier::Medium);
        assert_eq!(classify_confidence(Some(0.69999)), ConfidenceTier::Low);
        assert_eq!(classify_confidence(Some(0.0)), ConfidenceTier::Low);
        assert_eq!(classify_confidence(Some(1.0)), ConfidenceTier::High);
        assert_eq!(classify_confidence(None), ConfidenceTier::Unknown);
    }

    #[test]
    fn test_rows_follow_payload_order_and_join_provenance() {
        let result: ExtractionResult = serde_json::from_value(json!({
            "extraction": {"vendor": "Acme Corp", "total": 1250.0, "notes": null},
            "provenance": {
                "vendor": {"confidence": 0.95, "source": {"page_number": 1}},
                "total": {"confidence": 0.65, "source": null}
            }
        }))
        .unwrap();

        let rows = to_display_rows(&result, &HashSet::new());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].key, "vendor");
        assert_eq!(rows[0].confidence_tier, ConfidenceTier::High);
        assert_eq!(rows[0].source_page, Some(1));

        assert_eq!(rows[1].key, "total");
        assert_eq!(rows[1].confidence_tier, ConfidenceTier::Low);
        assert_eq!(rows[1].source_page, None);

        // No provenance entry at all for "notes".
        assert_eq!(rows[2].display_value, None);
        assert_eq!(rows[2].confidence_tier, ConfidenceTier::Unknown);
        assert_eq!(rows[2].source_page, None);
    }

    #[test]
    fn test_rows_reflect_expanded_keys() {
        let result: ExtractionResult = serde_json::from_value(json!({
            "extraction": {"summary": "line one\nline two", "short": "ok"}
        }))
        .unwrap();
        let expanded: HashSet<String> = ["summary".to_string()].into();

        let rows = to_display_rows(&result, &expanded);

        assert!(rows[0].is_long);
        assert!(rows[0].expanded);
        assert!(!rows[1].is_long);
        assert!(!rows[1].expanded);
    }

    #[test]
    fn test_presence_gate() {
        assert!(!has_any_extracted_value(&indexmap! {
            "a".to_string() => json!(""),
            "b".to_string() => json!(null),
        }));
        assert!(has_any_extracted_value(&indexmap! {
            "a".to_string() => json!(""),
            "b".to_string() => json!(0),
        }));
        assert!(has_any_extracted_value(&indexmap! {
            "a".to_string() => json!(false),
        }));
        assert!(has_any_extracted_value(&indexmap! {
            "a".to_string() => json!({}),
        }));
        assert!(!has_any_extracted_value(&indexmap! {
            "a".to_string() => json!("   \t"),
        }));
        assert!(!has_any_extracted_value(&IndexMap::new()));
    }
}
