//! HTTP Handlers

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::Html,
};
use serde::Serialize;
use tumbuh_core::Route;

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// SPA shell for any path without a static file
///
/// Declared routes get 200; anything else gets 404 with the same shell so
/// the client renders its not-found page.
pub async fn spa_shell(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<(StatusCode, Html<String>), (StatusCode, Json<ErrorResponse>)> {
    let index = state.config.index_path();
    let shell = tokio::fs::read_to_string(&index).await.map_err(|e| {
        tracing::error!(path = %index.display(), error = %e, "front-end shell unavailable");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Front end has not been built".into(),
                code: "SHELL_MISSING".into(),
            }),
        )
    })?;

    let path = uri.path();
    let status = if Route::is_declared(path) {
        StatusCode::OK
    } else {
        tracing::debug!(path, "unknown path, serving not-found shell");
        StatusCode::NOT_FOUND
    };

    Ok((status, Html(shell)))
}
