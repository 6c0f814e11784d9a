//! Application setup and initialization
//!
//! Initialization logic lives here rather than in main.rs so tests can build
//! the same application with an injected model.

pub mod routes;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use factura_core::Config;

use crate::progress::ProgressTracker;
use crate::services::{BatchProcessor, GeminiModel, InvoiceExtractor, VisionModel};
use crate::state::AppState;

/// Initialize the application with the production Gemini model.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    let model = Arc::new(GeminiModel::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
    )?);

    build_app(config, model)
}

/// Assemble state and routes around any [`VisionModel`] implementation.
pub fn build_app(
    config: Config,
    model: Arc<dyn VisionModel>,
) -> Result<(Arc<AppState>, axum::Router)> {
    let progress = ProgressTracker::new(Duration::from_millis(config.progress_tick_ms));
    let extractor = InvoiceExtractor::new(model);
    let batch = BatchProcessor::new(extractor, progress.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        batch,
        progress,
    });

    let router = routes::setup_routes(&config, state.clone())?;
    Ok((state, router))
}
