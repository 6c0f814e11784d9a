//! Batch progress handler

use std::sync::Arc;

use axum::{extract::State, Json};
use factura_core::models::ProgressResponse;

use crate::state::AppState;

/// Read the simulated progress of the most recent batch
///
/// The value is a time-based estimate, not a per-item completion signal.
#[utoipa::path(
    get,
    path = "/progress",
    tag = "invoices",
    responses(
        (status = 200, description = "Current progress, 0-100", body = ProgressResponse)
    )
)]
pub async fn get_progress(State(state): State<Arc<AppState>>) -> Json<ProgressResponse> {
    Json(ProgressResponse {
        progress: state.progress.read(),
    })
}
