//! Invoice extraction models.

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// One uploaded item: the original filename (or archive entry name) plus the
/// raw bytes. Consumed by extraction and discarded once processed.
#[derive(Debug, Clone)]
pub struct UploadItem {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadItem {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Structured invoice data extracted for a single image.
///
/// The field set is open-ended (the model fills what it can read off the
/// invoice and normalization prunes the rest), so the record is a JSON
/// object rather than a fixed struct. `timestamp` and `filename` are
/// synthesized on top of the model's fields.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ExtractedRecord(Map<String, Value>);

impl ExtractedRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Record the extraction time as an RFC 3339 UTC instant.
    pub fn stamp_timestamp(&mut self) {
        self.0
            .insert("timestamp".to_string(), Value::String(Utc::now().to_rfc3339()));
    }

    /// Attach the source item name.
    pub fn set_filename(&mut self, name: &str) {
        self.0
            .insert("filename".to_string(), Value::String(name.to_string()));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Successful `/upload` response body.
#[derive(Debug, Serialize)]
pub struct InvoiceBatchResponse {
    pub invoices: Vec<ExtractedRecord>,
}

/// `/progress` response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProgressResponse {
    /// Simulated batch progress, 0-100.
    pub progress: u8,
}
