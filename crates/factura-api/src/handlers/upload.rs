//! Invoice upload handler

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use factura_core::models::{InvoiceBatchResponse, UploadItem};
use factura_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Upload and process invoice image(s)
///
/// Accepts one or more files in the repeatable multipart field `image`.
/// A `.zip` file is expanded and each contained image processed in archive
/// order; anything else is treated as a single image. Items that are not
/// images or whose model reply cannot be parsed are skipped; the response
/// carries the records that survived, each with `filename` and `timestamp`.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "invoices",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Extracted invoice records", body = Object),
        (status = 400, description = "No files uploaded, or no item produced a record", body = ErrorResponse),
        (status = 500, description = "Corrupt archive or model failure", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_invoices"))]
pub async fn upload_invoices(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<InvoiceBatchResponse>, HttpAppError> {
    let mut items = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

        items.push(UploadItem::new(name, data.to_vec()));
    }

    if items.is_empty() {
        return Err(AppError::NoFilesUploaded.into());
    }

    let invoices = state.batch.process(items).await?;
    Ok(Json(InvoiceBatchResponse { invoices }))
}
