use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Every command returns `Result<T, AppError>`; `main` reports it via `code()`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("External service error: {0}")]
    ExternalService(#[from] LlmError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::ExternalService(LlmError::Unauthorized(_)) => "EXTERNAL_SERVICE_UNAUTHORIZED",
            AppError::ExternalService(LlmError::RateLimited(_)) => "EXTERNAL_SERVICE_RATE_LIMITED",
            AppError::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Logs the error at the level its kind deserves, without altering it.
    pub fn log(&self) {
        match self {
            AppError::InvalidInput(msg) => tracing::warn!("Rejected input: {msg}"),
            AppError::Configuration(msg) => tracing::error!("Configuration error: {msg}"),
            AppError::ExternalService(e) => tracing::error!("Completion service error: {e}"),
            AppError::Io(e) => tracing::error!("I/O error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
        }
    }
}
