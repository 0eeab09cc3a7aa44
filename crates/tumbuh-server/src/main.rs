//! Tumbuh Ide Static Host
//!
//! Axum server for the built WASM front end. Static files are served as
//! is; every other path gets the SPA shell, with a 404 status when the
//! path is not a declared page.

mod config;
mod handlers;
mod router;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    if config.index_path().is_file() {
        tracing::info!("✓ Front end found in {}", config.static_dir.display());
    } else {
        tracing::warn!("⚠ {} missing - pages will answer 500", config.index_path().display());
        tracing::warn!("  Build the front end: trunk build --release (in crates/tumbuh-web)");
    }

    let addr = config.bind_addr.clone();
    let app = router::build(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 Tumbuh Ide running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  GET  /*       - Front end (SPA shell)");

    axum::serve(listener, app).await?;

    Ok(())
}
