//! Application state shared across handlers.

use factura_core::Config;

use crate::progress::ProgressTracker;
use crate::services::BatchProcessor;

pub struct AppState {
    pub config: Config,
    pub batch: BatchProcessor,
    pub progress: ProgressTracker,
}
