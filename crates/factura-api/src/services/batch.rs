//! Batch orchestration for invoice uploads.

use factura_core::models::{ExtractedRecord, UploadItem};
use factura_core::AppError;
use factura_processing::expand_zip;

use crate::progress::ProgressTracker;

use super::extraction::{ExtractOutcome, InvoiceExtractor};

/// Drives a whole upload batch: starts the simulated progress advance,
/// walks the items in request order (expanding zip archives inline), and
/// assembles the ordered result list.
pub struct BatchProcessor {
    extractor: InvoiceExtractor,
    progress: ProgressTracker,
}

impl BatchProcessor {
    pub fn new(extractor: InvoiceExtractor, progress: ProgressTracker) -> Self {
        Self {
            extractor,
            progress,
        }
    }

    /// Process one upload batch.
    ///
    /// Escalation policy: per-item skips (non-image bytes, unparseable
    /// replies) are logged and the batch continues; a corrupt archive or a
    /// failed model call aborts the whole batch. An aborted batch leaves the
    /// progress advance running detached: only a successful batch waits for
    /// the advance to finish before responding.
    pub async fn process(&self, items: Vec<UploadItem>) -> Result<Vec<ExtractedRecord>, AppError> {
        let advance = tokio::spawn(self.progress.start_batch().run());

        let mut invoices = Vec::new();
        for item in items {
            let lowered = item.name.to_lowercase();

            if lowered.ends_with(".zip") {
                let entries =
                    expand_zip(&item.bytes).map_err(|e| AppError::Archive(e.to_string()))?;
                for entry in entries {
                    match self.extract_one(&entry.name, &entry.bytes).await? {
                        Some(mut record) => {
                            record.set_filename(&entry.name);
                            invoices.push(record);
                        }
                        None => continue,
                    }
                }
            } else if let Some(mut record) = self.extract_one(&lowered, &item.bytes).await? {
                record.set_filename(&lowered);
                invoices.push(record);
            }
        }

        // Deliberate UX delay: the response is held until the simulated
        // advance reaches 100, even when extraction finished earlier.
        if let Err(e) = advance.await {
            tracing::warn!(error = %e, "Progress advance task failed");
        }

        if invoices.is_empty() {
            return Err(AppError::NoValidResults);
        }

        tracing::info!(count = invoices.len(), "Extracted invoices");
        Ok(invoices)
    }

    async fn extract_one(
        &self,
        name: &str,
        bytes: &[u8],
    ) -> Result<Option<ExtractedRecord>, AppError> {
        match self
            .extractor
            .extract(bytes)
            .await
            .map_err(|e| AppError::Extraction(e.to_string()))?
        {
            ExtractOutcome::Extracted(record) => Ok(Some(record)),
            ExtractOutcome::Skipped(reason) => {
                tracing::warn!(item = %name, %reason, "Skipping item");
                Ok(None)
            }
        }
    }
}
