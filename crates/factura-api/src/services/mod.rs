//! Extraction services: the remote model client, the per-item extractor, and
//! the batch orchestrator.

mod batch;
mod extraction;
mod gemini;

pub use batch::BatchProcessor;
pub use extraction::{ExtractOutcome, InvoiceExtractor, SkipReason, EXTRACTION_PROMPT};
pub use gemini::GeminiModel;

use anyhow::Result;
use async_trait::async_trait;

/// A remote multimodal model that turns an image plus an instruction prompt
/// into free-form text. No reply schema is enforced on this side of the
/// boundary: downstream parsing has to be tolerant.
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// Send one image (`mime_type` + base64 payload) with the instruction
    /// `prompt` and return the model's raw text reply.
    async fn generate(&self, mime_type: &str, image_base64: &str, prompt: &str)
        -> Result<String>;
}
