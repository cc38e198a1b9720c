//! Application error types.

use thiserror::Error;

/// Application-level errors for recipe-categories.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain errors
    #[error("Unknown category: {0}")]
    UnknownCategory(i64),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    // Output errors
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::UnknownCategory(_) => "UNKNOWN_CATEGORY",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Json(_) => "JSON_ERROR",
        }
    }
}
