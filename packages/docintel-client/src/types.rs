//! Wire types owned by the client: endpoint responses and the extract
//! request body. The schema and result payload types live in the core
//! crate and are re-used here unchanged.

use docintel::ExtractionSchema;
use serde::{Deserialize, Serialize};

/// Response of the health endpoint.
///
/// Backends disagree on the exact shape, so every key is defaulted and the
/// rendered status falls back to "unknown".
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub message: Option<String>,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "unknown".to_string(),
            message: None,
        }
    }
}

impl HealthStatus {
    /// True when the backend reports itself usable.
    pub fn is_ok(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy")
    }
}

/// Response of the upload endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    /// Opaque handle for later extract calls
    pub doc_id: String,
}

/// Request body of the extract endpoint.
///
/// Field names are fixed by the backend contract:
/// `{"schema": ..., "batch_extraction": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest<'a> {
    pub schema: &'a ExtractionSchema,
    pub batch_extraction: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use docintel::{build, FieldDescriptor, FieldType};

    #[test]
    fn test_extract_request_wire_shape() {
        let built = build(&[FieldDescriptor::new("total", "Grand total", FieldType::Number)]);
        let body = serde_json::to_value(ExtractRequest {
            schema: &built.schema,
            batch_extraction: true,
        })
        .unwrap();

        assert_eq!(body["batch_extraction"], serde_json::json!(true));
        assert_eq!(body["schema"]["type"], "object");
        assert_eq!(
            body["schema"]["properties"]["total"]["description"],
            "Grand total"
        );
    }

    #[test]
    fn test_health_status_tolerates_sparse_bodies() {
        let health: HealthStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(health.status, "unknown");
        assert!(!health.is_ok());

        let health: HealthStatus = serde_json::from_str(r#"{"status": "healthy"}"#).unwrap();
        assert!(health.is_ok());
    }
}
