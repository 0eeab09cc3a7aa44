//! API Client
//!
//! [`AccountApi`] over HTTP: JSON `POST` to the Tumbuh Ide backend.

use async_trait::async_trait;
use serde::Serialize;
use tumbuh_core::form::{ContactMessage, Credentials, PasswordResetRequest, RegistrationRequest};
use tumbuh_core::{AccountApi, ApiError, ApiResult};

const REGISTER_PATH: &str = "/api/auth/register";
const LOGIN_PATH: &str = "/api/auth/login";
const PASSWORD_RESET_PATH: &str = "/api/auth/password-reset";
const CONTACT_PATH: &str = "/api/contact";

const DEFAULT_REJECTION: &str = "Permintaan gagal";

/// Backend reached over HTTP
pub struct HttpAccountApi {
    base: String,
}

impl HttpAccountApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ApiResult<()> {
        let client = reqwest::Client::new();
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        let url = endpoint(origin.as_deref(), &self.base, path);
        tracing::debug!(%url, "posting to account API");

        let response = client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Err(rejection(status.as_u16(), &body))
    }
}

#[async_trait(?Send)]
impl AccountApi for HttpAccountApi {
    async fn register(&self, request: &RegistrationRequest) -> ApiResult<()> {
        self.post(REGISTER_PATH, request).await
    }

    async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        self.post(LOGIN_PATH, credentials).await
    }

    async fn request_password_reset(&self, request: &PasswordResetRequest) -> ApiResult<()> {
        self.post(PASSWORD_RESET_PATH, request).await
    }

    async fn submit_contact_message(&self, message: &ContactMessage) -> ApiResult<()> {
        self.post(CONTACT_PATH, message).await
    }

    fn name(&self) -> &str {
        "HTTP"
    }
}

/// Absolute URL for `path`; a root-relative base is resolved against the page origin
fn endpoint(origin: Option<&str>, base: &str, path: &str) -> String {
    if base.starts_with('/') {
        let origin = origin.unwrap_or("http://localhost:3000");
        format!("{origin}{base}{path}")
    } else {
        format!("{base}{path}")
    }
}

/// Error for a non-success response with `body`
///
/// The backend reports `{"error": "..."}`. An unreadable body is a decode
/// failure unless the status is already a server error; 503 means the
/// service is down.
fn rejection(status: u16, body: &str) -> ApiError {
    let message = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(data) => data["error"].as_str().unwrap_or(DEFAULT_REJECTION).to_string(),
        Err(_) if status >= 500 || body.trim().is_empty() => DEFAULT_REJECTION.to_string(),
        Err(err) => {
            tracing::warn!(status, error = %err, "unreadable error body");
            return ApiError::Decode(format!("status {status}: {err}"));
        }
    };
    if status == 503 {
        ApiError::Unavailable(message)
    } else {
        ApiError::Rejected { status, message }
    }
}
