//! Extraction result payload - an external, partially-trusted shape.
//!
//! The backend's response is trusted in outline but never schema-validated
//! here: every key is defaulted so a sparse or empty payload degrades to
//! absent values instead of a deserialization error. Both mappings keep the
//! payload's own key order so repeated renders of the same response are
//! identical.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured response of a successful extract call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionResult {
    /// Field name -> raw extracted value (`null` when not found)
    pub extraction: IndexMap<String, Value>,

    /// Aggregate run statistics
    pub metadata: ExtractionMetadata,

    /// Field name -> per-field confidence and source location
    pub provenance: IndexMap<String, FieldProvenance>,
}

impl ExtractionResult {
    /// Provenance entry for a field, if the backend reported one.
    pub fn provenance_for(&self, key: &str) -> Option<&FieldProvenance> {
        self.provenance.get(key)
    }
}

/// Aggregate statistics reported alongside an extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionMetadata {
    /// Overall confidence in `[0, 1]`
    pub confidence: f64,

    /// Number of fields the backend located
    pub fields_found: u64,

    /// Server-side processing time in seconds
    pub processing_time: f64,

    /// Whether the backend flagged the run for human review
    pub requires_review: bool,
}

/// Where one extracted value came from and how confident the backend is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldProvenance {
    /// Per-field confidence in `[0, 1]`; `None` renders as a neutral
    /// placeholder, not as zero
    pub confidence: Option<f64>,

    /// Source location, when the backend pinpointed one
    pub source: Option<SourceRef>,
}

impl FieldProvenance {
    /// Source page number, if located.
    pub fn page_number(&self) -> Option<u64> {
        self.source.as_ref().and_then(|s| s.page_number)
    }
}

/// Location of an extracted value within the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceRef {
    /// 1-based page number
    pub page_number: Option<u64>,
}
