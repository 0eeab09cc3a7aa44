//! Route Wiring

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{health_check, spa_shell};
use crate::state::AppState;

/// Health endpoint, static assets, then the SPA shell
pub fn build(state: AppState) -> Router {
    let assets =
        ServeDir::new(&state.config.static_dir).fallback(get(spa_shell).with_state(state.clone()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::config::ServerConfig;

    const SHELL: &str = "<!doctype html><html><body>tumbuh</body></html>";

    /// Temporary static dir, removed on drop
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("tumbuh-server-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(dir.join("assets")).unwrap();
            Self(dir)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn app(static_dir: &Path) -> Router {
        build(AppState::new(ServerConfig {
            bind_addr: "127.0.0.1:0".into(),
            static_dir: static_dir.to_path_buf(),
        }))
    }

    fn built_site() -> ScratchDir {
        let dir = ScratchDir::new();
        std::fs::write(dir.path().join("index.html"), SHELL).unwrap();
        std::fs::write(dir.path().join("assets/app.js"), "console.log('ok');").unwrap();
        dir
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let dir = built_site();
        let (status, body) = get_path(app(dir.path()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_declared_routes_get_shell() {
        let dir = built_site();
        for path in ["/", "/about", "/forgot-password", "/privacy"] {
            let (status, body) = get_path(app(dir.path()), path).await;
            assert_eq!(status, StatusCode::OK, "path {path}");
            assert_eq!(body, SHELL);
        }
    }

    #[tokio::test]
    async fn test_unknown_paths_get_shell_with_404() {
        let dir = built_site();
        for path in ["/this-does-not-exist", "/about/", "/about/team", "/dashboard"] {
            let (status, body) = get_path(app(dir.path()), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
            assert_eq!(body, SHELL);
        }
    }

    #[tokio::test]
    async fn test_assets_served_directly() {
        let dir = built_site();
        let (status, body) = get_path(app(dir.path()), "/assets/app.js").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('ok');");
    }

    #[tokio::test]
    async fn test_missing_build_is_server_error() {
        let dir = ScratchDir::new();
        let (status, body) = get_path(app(dir.path()), "/contact").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("SHELL_MISSING"));
    }

    #[test]
    fn test_scratch_dir_is_removed() {
        let dir = ScratchDir::new();
        let path = dir.path().to_path_buf();
        assert!(path.exists());
        drop(dir);
        assert!(!path.exists());
    }
}
