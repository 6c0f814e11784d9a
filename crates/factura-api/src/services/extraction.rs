//! Per-item invoice extraction: MIME gate, model call, parse, normalize.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use base64::Engine;
use serde_json::Value;

use factura_core::models::ExtractedRecord;
use factura_processing::{parse_model_reply, prune_empty, sniff_image_mime};

use super::VisionModel;

/// Instruction prompt sent with every image. The schema uses empty strings
/// and zeroes as "not filled in" placeholders, which normalization prunes
/// from the reply afterwards.
pub const EXTRACTION_PROMPT: &str = r#"You are an invoice data extractor. Extract the following fields in JSON format:
{"vendor": {"name": "", "company": ""}, "invoice_no": "", "date": "", "due_date": "", "vehicle_no": "",
"bill_to": {"name": "", "company": ""}, "issued_to": {"name": "", "company": ""}, "items": [{"description": "", "unit_price": 0, "quantity": 0, "total": 0, "remark": ""}],
"subtotal": 0, "tax_percent": 0, "total": 0}"#;

/// Why an item produced no record. Skips are recovered locally: the batch
/// continues without the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Content sniffing did not find an image format.
    NotAnImage,
    /// The model replied, but no JSON object could be located in the reply.
    UnparseableReply,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnImage => write!(f, "not an image"),
            SkipReason::UnparseableReply => write!(f, "unparseable model reply"),
        }
    }
}

/// Result of extracting one item. A model-call failure is not an outcome;
/// it propagates as an error and aborts the whole batch.
#[derive(Debug)]
pub enum ExtractOutcome {
    Extracted(ExtractedRecord),
    Skipped(SkipReason),
}

/// Extracts structured invoice data from a single image via the remote
/// model.
pub struct InvoiceExtractor {
    model: Arc<dyn VisionModel>,
}

impl InvoiceExtractor {
    pub fn new(model: Arc<dyn VisionModel>) -> Self {
        Self { model }
    }

    /// Run one image through the pipeline: sniff the MIME type, ship the
    /// bytes to the model, scrape the reply for a JSON object, stamp the
    /// extraction timestamp, and prune empty fields.
    ///
    /// Returns `Skipped` for non-images and unparseable replies; returns
    /// `Err` only when the model call itself fails.
    pub async fn extract(&self, image: &[u8]) -> Result<ExtractOutcome> {
        let Some(mime_type) = sniff_image_mime(image) else {
            return Ok(ExtractOutcome::Skipped(SkipReason::NotAnImage));
        };

        let image_base64 = base64::engine::general_purpose::STANDARD.encode(image);
        let reply = self
            .model
            .generate(mime_type, &image_base64, EXTRACTION_PROMPT)
            .await?;

        let Some(fields) = parse_model_reply(&reply) else {
            return Ok(ExtractOutcome::Skipped(SkipReason::UnparseableReply));
        };

        let mut record = ExtractedRecord::new(fields);
        record.stamp_timestamp();

        // Pruning runs over the whole record, so zero-valued schema fields
        // and nested objects the model left blank drop out here.
        let pruned = prune_empty(Value::Object(record.into_inner()));
        let fields = match pruned {
            Value::Object(fields) => fields,
            _ => unreachable!("pruning preserves the top-level object"),
        };

        Ok(ExtractOutcome::Extracted(ExtractedRecord::new(fields)))
    }
}
