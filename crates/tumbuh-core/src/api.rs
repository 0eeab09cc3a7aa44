//! Account/Content API Strategy
//!
//! The backend for registration, login, password reset and contact
//! messages does not exist yet. Pages talk to it only through
//! [`AccountApi`]; [`SimulatedAccountApi`] stands in with a fixed delay and
//! can be swapped for a real client without touching page control flow.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let api: Arc<dyn AccountApi> = Arc::new(SimulatedAccountApi::new(scheduler, delay));
//! api.register(&request).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::form::{ContactMessage, Credentials, PasswordResetRequest, RegistrationRequest};
use crate::timer::{self, Scheduler};

/// Delay of every simulated call
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Submission failure reported by the backend
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// Request never reached the backend or the connection dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Response body was not understood
    #[error("Decode error: {0}")]
    Decode(String),

    /// Backend is down or not configured
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Check if resubmitting unchanged input might succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Unavailable(_) => true,
            ApiError::Rejected { status, .. } => *status >= 500 || *status == 429,
            ApiError::Decode(_) => false,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Tidak dapat terhubung ke server. Periksa koneksi internet Anda.".into()
            }
            ApiError::Rejected { status: 429, .. } => {
                "Terlalu banyak percobaan. Silakan tunggu sebentar.".into()
            }
            ApiError::Rejected { status, .. } if *status >= 500 => {
                "Server sedang bermasalah. Silakan coba lagi.".into()
            }
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::Unavailable(_) => "Layanan sedang tidak tersedia. Silakan coba lagi nanti.".into(),
            ApiError::Decode(_) => "Terjadi kesalahan tak terduga. Silakan coba lagi.".into(),
        }
    }
}

/// Account/content backend
///
/// Each call has a single success/failure outcome; there is no partial
/// failure. Futures are not `Send` because the browser client is
/// single-threaded.
#[async_trait(?Send)]
pub trait AccountApi: Send + Sync {
    async fn register(&self, request: &RegistrationRequest) -> ApiResult<()>;

    async fn login(&self, credentials: &Credentials) -> ApiResult<()>;

    async fn request_password_reset(&self, request: &PasswordResetRequest) -> ApiResult<()>;

    async fn submit_contact_message(&self, message: &ContactMessage) -> ApiResult<()>;

    /// Backend name for logs
    fn name(&self) -> &str;
}

/// Stand-in backend: waits, then succeeds
pub struct SimulatedAccountApi<S> {
    scheduler: S,
    delay: Duration,
    failure: Option<ApiError>,
}

impl<S: Scheduler> SimulatedAccountApi<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            failure: None,
        }
    }

    /// Make every call fail with `error` after the delay
    pub fn failing_with(mut self, error: ApiError) -> Self {
        self.failure = Some(error);
        self
    }

    async fn settle(&self, operation: &str) -> ApiResult<()> {
        tracing::debug!(operation, delay_ms = self.delay.as_millis(), "simulating account API call");
        timer::sleep(&self.scheduler, self.delay).await;
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl<S: Scheduler + Send + Sync> AccountApi for SimulatedAccountApi<S> {
    async fn register(&self, request: &RegistrationRequest) -> ApiResult<()> {
        tracing::info!(email = %request.email, "register");
        self.settle("register").await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        tracing::info!(email = %credentials.email, "login");
        self.settle("login").await
    }

    async fn request_password_reset(&self, request: &PasswordResetRequest) -> ApiResult<()> {
        tracing::info!(email = %request.email, "password reset");
        self.settle("request_password_reset").await
    }

    async fn submit_contact_message(&self, message: &ContactMessage) -> ApiResult<()> {
        tracing::info!(email = %message.email, subject = ?message.subject, "contact message");
        self.settle("submit_contact_message").await
    }

    fn name(&self) -> &str {
        "Simulated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TokioScheduler;

    fn reset_request() -> PasswordResetRequest {
        PasswordResetRequest { email: "budi@example.com".into() }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_call_succeeds_after_delay() {
        let api = SimulatedAccountApi::new(TokioScheduler, DEFAULT_SUBMIT_DELAY);
        let start = tokio::time::Instant::now();

        api.request_password_reset(&reset_request()).await.unwrap();
        assert!(start.elapsed() >= DEFAULT_SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_simulation() {
        let api = SimulatedAccountApi::new(TokioScheduler, Duration::from_millis(10))
            .failing_with(ApiError::Unavailable("maintenance".into()));

        let err = api.request_password_reset(&reset_request()).await.unwrap_err();
        assert_eq!(err, ApiError::Unavailable("maintenance".into()));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_user_messages() {
        let rejected = ApiError::Rejected {
            status: 409,
            message: "Email sudah terdaftar".into(),
        };
        assert_eq!(rejected.user_message(), "Email sudah terdaftar");
        assert!(!rejected.is_retryable());

        let overloaded = ApiError::Rejected { status: 503, message: String::new() };
        assert!(overloaded.is_retryable());
        assert_eq!(overloaded.user_message(), "Server sedang bermasalah. Silakan coba lagi.");
    }
}
