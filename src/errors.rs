//! Centralized error handling.
//!
//! Every failure propagates to the process boundary unchanged; nothing
//! here retries or recovers.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    // Validation
    #[error("Invalid input: {0}")]
    Validation(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Short stable code for log lines
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Output(_) => "OUTPUT_ERROR",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}
