//! Error Types

use thiserror::Error;

use crate::api::ApiError;
use crate::form::ValidationError;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site-level error types
///
/// Page flows surface these through the notification surface; nothing here
/// is fatal to the application shell.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Local form validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Account/content API call failed
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    /// Whether resubmitting the same input can succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            SiteError::Api(err) => err.is_retryable(),
            _ => false,
        }
    }

    /// Convert to a message suitable for a toast description
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Validation(err) => err.to_string(),
            SiteError::Api(err) => err.user_message(),
            SiteError::Config(_) | SiteError::Json(_) => {
                "Terjadi kesalahan tak terduga. Silakan coba lagi.".into()
            }
        }
    }
}
