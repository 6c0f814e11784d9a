//! Error types module
//!
//! This module provides the unified `AppError` enum used throughout the
//! application, together with the HTTP and logging metadata each variant
//! carries. Per-item extraction failures are not errors: they are skip
//! outcomes handled inside the batch loop; only input rejection and
//! batch-fatal conditions appear here.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like input validation failures
    Debug,
    /// Warning level - for rejected-but-well-formed requests
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No files uploaded")]
    NoFilesUploaded,

    #[error("No valid images found to process")]
    NoValidResults,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code to return for this error
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::NoFilesUploaded => 400,
            AppError::NoValidResults => 400,
            AppError::InvalidInput(_) => 400,
            AppError::Archive(_) => 500,
            AppError::Extraction(_) => 500,
            AppError::Internal(_) => 500,
        }
    }

    /// Get the error type name for diagnostics
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NoFilesUploaded => "NoFilesUploaded",
            AppError::NoValidResults => "NoValidResults",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Archive(_) => "Archive",
            AppError::Extraction(_) => "Extraction",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::NoFilesUploaded => LogLevel::Debug,
            AppError::NoValidResults => LogLevel::Warn,
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::Archive(_) => LogLevel::Error,
            AppError::Extraction(_) => LogLevel::Error,
            AppError::Internal(_) => LogLevel::Error,
        }
    }

    /// Client-facing message. Batch-fatal variants echo the underlying
    /// message behind a common prefix; this service is an internal tool and
    /// the caller is expected to want the detail.
    pub fn client_message(&self) -> String {
        match self {
            AppError::NoFilesUploaded => "No files uploaded".to_string(),
            AppError::NoValidResults => "No valid images found to process".to_string(),
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::Archive(msg) => format!("Invoice processing failed: {}", msg),
            AppError::Extraction(msg) => format!("Invoice processing failed: {}", msg),
            AppError::Internal(msg) => format!("Invoice processing failed: {}", msg),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
