//! Pure REST API client for the document-extraction backend.
//!
//! A minimal client covering the three endpoints the front-end needs:
//! health check, PDF upload, and schema-driven extraction. One request per
//! call - retry, backoff, and cancellation are the caller's concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use docintel_client::DocintelClient;
//!
//! let client = DocintelClient::new("http://localhost:8000");
//!
//! let upload = client.upload_document("loan.pdf", bytes).await?;
//! let result = client.extract(&upload.doc_id, &built.schema, false).await?;
//! for (field, value) in &result.extraction {
//!     println!("{field}: {value}");
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ClientError, Result};
pub use types::{ExtractRequest, HealthStatus, UploadResponse};

use docintel::{ExtractionResult, ExtractionSchema};
use serde::de::DeserializeOwned;

/// Environment variable naming the backend base URL.
pub const API_URL_ENV: &str = "DOCINTEL_API_URL";

/// Document-extraction backend client.
pub struct DocintelClient {
    client: reqwest::Client,
    base_url: String,
}

impl DocintelClient {
    /// Create a new client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create from the `DOCINTEL_API_URL` environment variable.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV)
            .map_err(|_| ClientError::Config(format!("{API_URL_ENV} not set")))?;
        Ok(Self::new(base_url))
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ping the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        read_json(resp).await
    }

    /// Upload a PDF and receive the opaque `doc_id` handle for extraction.
    ///
    /// The payload is sent as a multipart form with a single part named
    /// `file`, carrying the given file name.
    pub async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadResponse> {
        tracing::info!(file_name, size = bytes.len(), "Uploading document");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/documents/upload", self.base_url);
        let resp = self.client.post(&url).multipart(form).send().await?;
        let upload: UploadResponse = read_json(resp).await?;

        tracing::info!(doc_id = %upload.doc_id, "Document uploaded");
        Ok(upload)
    }

    /// Run an extraction against a previously uploaded document.
    ///
    /// The request body is `{"schema": <schema>, "batch_extraction": <bool>}`
    /// as the backend expects; the response is deserialized tolerantly so a
    /// sparse payload still yields a usable result.
    pub async fn extract(
        &self,
        doc_id: &str,
        schema: &ExtractionSchema,
        batch_extraction: bool,
    ) -> Result<ExtractionResult> {
        tracing::info!(
            doc_id,
            fields = schema.properties.len(),
            batch_extraction,
            "Requesting extraction"
        );

        let url = format!("{}/documents/{}/extract", self.base_url, doc_id);
        let resp = self
            .client
            .post(&url)
            .json(&ExtractRequest {
                schema,
                batch_extraction,
            })
            .send()
            .await?;
        let result: ExtractionResult = read_json(resp).await?;

        tracing::info!(
            fields_found = result.metadata.fields_found,
            requires_review = result.metadata.requires_review,
            "Extraction complete"
        );
        Ok(result)
    }
}

/// Decode a success body, or surface the error body's message.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Best human-readable message in an error body: a JSON `detail` or
/// `message` key when present, otherwise the raw text.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            match value.get(key) {
                Some(serde_json::Value::String(s)) if !s.is_empty() => return s.clone(),
                Some(other) if !other.is_null() => return other.to_string(),
                _ => {}
            }
        }
    }
    if body.trim().is_empty() {
        "request failed".to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = DocintelClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_error_message_prefers_detail() {
        assert_eq!(
            error_message(r#"{"detail": "Document not found", "message": "other"}"#),
            "Document not found"
        );
        assert_eq!(error_message(r#"{"message": "Bad schema"}"#), "Bad schema");
    }

    #[test]
    fn test_error_message_keeps_structured_detail() {
        // FastAPI validation errors carry a non-string detail.
        let message = error_message(r#"{"detail": [{"loc": ["body"], "msg": "field required"}]}"#);
        assert!(message.contains("field required"));
    }

    #[test]
    fn test_error_message_falls_back_to_raw_text() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(""), "request failed");
        assert_eq!(error_message(r#"{"unrelated": 1}"#), r#"{"unrelated": 1}"#);
    }
}
